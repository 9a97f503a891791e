//! Handler for short token redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// Resolution records the click (atomic counter increment plus one click event)
/// before answering; a click accounting failure is logged but never blocks the
/// redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let resolution = state.mapping_service.resolve_token(&token).await?;

    tracing::debug!(
        token,
        click_count = resolution.click_count,
        "redirecting to original url"
    );

    Ok(Redirect::temporary(&resolution.original_url))
}
