use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn bundled_config() -> ServerConfig {
    ServerConfig { data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"), ..ServerConfig::default() }
}

async fn get_path(router: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_reports_catalog_size() {
    let config = bundled_config();
    let state = AppState::load(&config.catalog_path()).await.unwrap();
    let (status, body) = get_path(api_routes(state, &config), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["universities"], 14);
}

#[tokio::test]
async fn healthz_with_empty_catalog_reports_zero() {
    let (status, body) = get_path(api_routes(AppState::default(), &bundled_config()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["universities"], 0);
}

#[tokio::test]
async fn catalog_endpoint_serves_valid_catalog() {
    let (status, body) = get_path(api_routes(AppState::default(), &bundled_config()), CATALOG_ENDPOINT).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    let parsed = catalog::parse_catalog(&text).unwrap();
    assert_eq!(parsed.len(), 14);
}

#[tokio::test]
async fn catalog_endpoint_follows_configured_file_name() {
    let mut config = bundled_config();
    config.catalog_file = "missing.json".to_owned();
    let (status, _) = get_path(api_routes(AppState::default(), &config), CATALOG_ENDPOINT).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_data_file_is_not_found() {
    let (status, _) = get_path(api_routes(AppState::default(), &bundled_config()), "/data/nope.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
