mod common;

use axum_test::TestServer;
use serde_json::json;
use url_mapper::routes::app_router;

#[tokio::test]
async fn test_shorten_success() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "https://example.com/some/path" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let token = body["short_token"].as_str().unwrap();
    assert_eq!(token.len(), 8);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["original_url"], "https://example.com/some/path");
    assert_eq!(body["click_count"], 0);
    assert_eq!(body["owner_id"], "alice");
    assert_eq!(
        body["short_url"],
        format!("https://s.example.com/{token}")
    );
}

#[tokio::test]
async fn test_shorten_empty_url_is_bad_request() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_missing_identity_is_bad_request() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/api/urls/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_my_mappings_lists_only_callers_urls() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    for (url, owner) in [
        ("https://example.com/a", "alice"),
        ("https://example.com/b", "alice"),
        ("https://example.com/c", "bob"),
    ] {
        server
            .post("/api/urls/shorten")
            .add_header("x-user-id", owner)
            .json(&json!({ "original_url": url }))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/api/urls")
        .add_header("x-user-id", "alice")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|m| m["owner_id"] == "alice"));
}
