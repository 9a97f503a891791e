//! Handler listing the caller's mappings.

use axum::{Json, extract::State};

use crate::api::dto::MappingResponse;
use crate::api::extract::OwnerId;
use crate::error::AppError;
use crate::state::AppState;

/// Returns all mappings created by the authenticated owner.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// No ordering is guaranteed.
pub async fn my_mappings_handler(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
) -> Result<Json<Vec<MappingResponse>>, AppError> {
    let mappings = state.mapping_service.get_mappings_by_owner(&owner_id).await?;

    Ok(Json(
        mappings
            .into_iter()
            .map(|m| MappingResponse::from_mapping(m, &state.base_url))
            .collect(),
    ))
}
