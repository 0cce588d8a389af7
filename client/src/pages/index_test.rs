use super::*;

fn loaded() -> CatalogState {
    CatalogState::from_result(Ok(catalog::Catalog::default()))
}

#[test]
fn grid_status_loading_before_fetch_settles() {
    assert_eq!(grid_status(&CatalogState::loading(), 0), GridStatus::Loading);
}

#[test]
fn grid_status_reports_load_failure() {
    let state = CatalogState::from_result(Err("catalog request failed: 500".to_owned()));
    assert_eq!(grid_status(&state, 0), GridStatus::Failed("catalog request failed: 500".to_owned()));
}

#[test]
fn grid_status_empty_when_nothing_matches() {
    assert_eq!(grid_status(&loaded(), 0), GridStatus::Empty);
}

#[test]
fn grid_status_results_when_records_visible() {
    assert_eq!(grid_status(&loaded(), 3), GridStatus::Results);
}
