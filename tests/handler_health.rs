mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::FakeSiteApi;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server(Arc::new(FakeSiteApi::new(common::owner_site())));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["api"]["status"], "ok");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server(Arc::new(FakeSiteApi::new(common::owner_site())));

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("api").is_some());
    assert!(json["checks"].get("sessions").is_some());
}

#[tokio::test]
async fn test_health_counts_editor_sessions() {
    let server = common::make_server(Arc::new(FakeSiteApi::new(common::owner_site())));
    common::open_editor(&server).await;

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["sessions"]["message"], "Active: 1");
}

#[tokio::test]
async fn test_health_degraded_when_api_fails() {
    let mut api = FakeSiteApi::new(common::owner_site());
    api.fail_catalog = true;
    let server = common::make_server(Arc::new(api));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["api"]["status"], "error");
}
