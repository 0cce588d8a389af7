use super::*;

fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/universities.json")
}

#[test]
fn default_state_is_empty() {
    let state = AppState::default();
    assert!(state.catalog.is_empty());
    assert_eq!(state.stats.total, 0);
}

#[tokio::test]
async fn load_reads_bundled_catalog() {
    let state = AppState::load(&bundled_catalog_path()).await.unwrap();
    assert_eq!(state.catalog.len(), 14);
    assert_eq!(state.stats.total, 14);
    assert!(state.stats.cities > 0);
}

#[tokio::test]
async fn load_reports_missing_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/does-not-exist.json");
    let err = AppState::load(&path).await.err().expect("missing file should fail");
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}
