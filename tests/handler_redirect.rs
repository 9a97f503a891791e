mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use url_mapper::routes::app_router;

#[tokio::test]
async fn test_redirect_to_original_url() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let created = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "https://example.com/x" }))
        .await
        .json::<serde_json::Value>();
    let token = created["short_token"].as_str().unwrap();

    let response = server.get(&format!("/{token}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/x");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let created = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "https://example.com/x" }))
        .await
        .json::<serde_json::Value>();
    let token = created["short_token"].as_str().unwrap();

    for _ in 0..3 {
        server
            .get(&format!("/{token}"))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let listed = server
        .get("/api/urls")
        .add_header("x-user-id", "alice")
        .await
        .json::<serde_json::Value>();

    assert_eq!(listed[0]["click_count"], 3);
}

#[tokio::test]
async fn test_redirect_unknown_token_is_not_found() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/doesnotex").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_health() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
}
