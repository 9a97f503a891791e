mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use url_mapper::routes::app_router;

#[tokio::test]
async fn test_analytics_returns_daily_counts() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state.clone())).unwrap();

    let created = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "https://example.com/x" }))
        .await
        .json::<serde_json::Value>();
    let token = created["short_token"].as_str().unwrap();

    // Two redirects today: one bucket with count 2.
    for _ in 0..2 {
        server
            .get(&format!("/{token}"))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let response = server
        .get(&format!("/api/urls/analytics/{token}"))
        .add_query_param("start", "2000-01-01T00:00:00Z")
        .add_query_param("end", "2100-01-01T00:00:00Z")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["count"], 2);
}

#[tokio::test]
async fn test_analytics_unknown_token_is_empty_list() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .get("/api/urls/analytics/doesnotexist")
        .add_query_param("start", "2024-01-01T00:00:00Z")
        .add_query_param("end", "2024-01-02T00:00:00Z")
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_analytics_inverted_range_is_bad_request() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .get("/api/urls/analytics/Ab3xYz09")
        .add_query_param("start", "2024-01-02T00:00:00Z")
        .add_query_param("end", "2024-01-01T00:00:00Z")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_total_clicks_by_owner() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let created = server
        .post("/api/urls/shorten")
        .add_header("x-user-id", "alice")
        .json(&json!({ "original_url": "https://example.com/x" }))
        .await
        .json::<serde_json::Value>();
    let token = created["short_token"].as_str().unwrap();

    server
        .get(&format!("/{token}"))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let today = chrono::Utc::now().date_naive();
    let response = server
        .get("/api/urls/total-clicks")
        .add_header("x-user-id", "alice")
        .add_query_param("start_date", today.to_string())
        .add_query_param("end_date", today.to_string())
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body[today.to_string()], 1);
}

#[tokio::test]
async fn test_total_clicks_inverted_range_is_bad_request() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .get("/api/urls/total-clicks")
        .add_header("x-user-id", "alice")
        .add_query_param("start_date", "2024-03-06")
        .add_query_param("end_date", "2024-03-05")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_total_clicks_missing_identity_is_bad_request() {
    let (state, _stores) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .get("/api/urls/total-clicks")
        .add_query_param("start_date", "2024-03-05")
        .add_query_param("end_date", "2024-03-06")
        .await;

    response.assert_status_bad_request();
}
