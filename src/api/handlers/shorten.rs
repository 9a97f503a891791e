//! Handler for the mapping creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::{CreateMappingRequest, MappingResponse};
use crate::api::extract::OwnerId;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short mapping for a URL.
///
/// # Endpoint
///
/// `POST /api/urls/shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on an empty URL or missing identity header.
/// Returns 500 on storage failure or (theoretical) token space exhaustion.
pub async fn shorten_handler(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Json(payload): Json<CreateMappingRequest>,
) -> Result<Json<MappingResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .mapping_service
        .create_mapping(&payload.original_url, &owner_id)
        .await?;

    Ok(Json(MappingResponse::from_mapping(
        mapping,
        &state.base_url,
    )))
}
