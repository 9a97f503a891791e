//! Handlers for the analytics endpoints.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;

use crate::api::dto::{AnalyticsQuery, TotalClicksQuery};
use crate::api::extract::OwnerId;
use crate::application::services::DailyClicks;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-date click counts for one short token.
///
/// # Endpoint
///
/// `GET /api/urls/analytics/{token}?start=..&end=..`
///
/// `start` and `end` are RFC 3339 instants, both inclusive. An unknown token
/// yields an empty list, not a 404.
///
/// # Errors
///
/// Returns 400 Bad Request if `start > end`.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<Vec<DailyClicks>>, AppError> {
    let daily = state
        .analytics_service
        .get_click_analytics(&token, query.start, query.end)
        .await?;

    Ok(Json(daily))
}

/// Returns per-date click totals across all of the caller's mappings.
///
/// # Endpoint
///
/// `GET /api/urls/total-clicks?start_date=..&end_date=..`
///
/// Both dates are inclusive of the whole calendar day. The result is a sparse
/// date-to-count map; dates without clicks are absent.
///
/// # Errors
///
/// Returns 400 Bad Request if `start_date > end_date` or the identity header is
/// missing.
pub async fn total_clicks_handler(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Query(query): Query<TotalClicksQuery>,
) -> Result<Json<BTreeMap<NaiveDate, i64>>, AppError> {
    let totals = state
        .analytics_service
        .get_total_clicks_by_owner(&owner_id, query.start_date, query.end_date)
        .await?;

    Ok(Json(totals))
}
