//! Application router.
//!
//! # Route Structure
//!
//! - `GET  /{token}`                     - Short token redirect (public)
//! - `GET  /health`                      - Health check (public)
//! - `POST /api/urls/shorten`            - Create a mapping
//! - `GET  /api/urls`                    - List the caller's mappings
//! - `GET  /api/urls/analytics/{token}`  - Per-date clicks for one token
//! - `GET  /api/urls/total-clicks`       - Per-date clicks across the caller's mappings
//!
//! The `/api` routes consume the opaque owner identity forwarded by the
//! authenticating proxy (see [`crate::api::extract`]); authorization itself is
//! not enforced here.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    analytics_handler, health_handler, my_mappings_handler, redirect_handler, shorten_handler,
    total_clicks_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/urls/shorten", post(shorten_handler))
        .route("/urls", get(my_mappings_handler))
        .route("/urls/analytics/{token}", get(analytics_handler))
        .route("/urls/total-clicks", get(total_clicks_handler));

    Router::new()
        .route("/{token}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
