mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_empty_store() {
    let (state, _clock, _store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["links"], 0);
    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_health_endpoint_reports_totals() {
    let (state, _clock, _store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "one1" }))
        .await;
    server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.org", "shortcode": "two2" }))
        .await;
    server.get("/one1").await;

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["links"], 2);
    assert_eq!(json["clicks"], 1);
}
