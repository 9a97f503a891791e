//! Time-windowed click analytics aggregation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickEventRepository, MappingRepository};
use crate::error::AppError;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use serde_json::json;

/// Click count for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub count: i64,
}

/// Service aggregating click events into sparse per-date counts.
///
/// The two operations use deliberately different range boundary policies (see the
/// [`ClickEventRepository`] contract); both are caller-observable behavior and are
/// pinned by tests.
pub struct AnalyticsService {
    mappings: Arc<dyn MappingRepository>,
    clicks: Arc<dyn ClickEventRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(mappings: Arc<dyn MappingRepository>, clicks: Arc<dyn ClickEventRepository>) -> Self {
        Self { mappings, clicks }
    }

    /// Returns per-date click counts for one token over `[start, end]`
    /// (inclusive on both instants).
    ///
    /// An unknown token yields an empty result, not an error. This asymmetry
    /// with token resolution (which reports `NotFound`) mirrors the existing
    /// caller-facing contract and is intentional.
    ///
    /// Dates with zero clicks are omitted; callers must not assume every date in
    /// the range appears.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the token is empty or `start > end`.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_click_analytics(
        &self,
        short_token: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyClicks>, AppError> {
        if short_token.trim().is_empty() {
            return Err(AppError::bad_request(
                "Short token cannot be empty",
                json!({}),
            ));
        }
        if start > end {
            return Err(AppError::bad_request(
                "Range start must not be after range end",
                json!({ "start": start, "end": end }),
            ));
        }

        let Some(mapping) = self.mappings.find_by_token(short_token).await? else {
            tracing::warn!(short_token, "no mapping found for analytics request");
            return Ok(Vec::new());
        };

        let events = self
            .clicks
            .find_by_mapping_and_range(mapping.id, start, end)
            .await?;

        Ok(group_by_date(&events)
            .into_iter()
            .map(|(date, count)| DailyClicks { date, count })
            .collect())
    }

    /// Returns per-date click counts across all mappings of one owner, with both
    /// calendar dates inclusive.
    ///
    /// The inclusive end date is implemented by advancing the upper bound to the
    /// start of the following day and querying a half-open interval there.
    /// Counts are combined across the owner's mappings, not reported per mapping,
    /// and dates without clicks are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner is empty, `start_date` is
    /// after `end_date`, or the advanced end date is out of calendar range.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_total_clicks_by_owner(
        &self,
        owner_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, i64>, AppError> {
        if owner_id.trim().is_empty() {
            return Err(AppError::bad_request("Owner cannot be empty", json!({})));
        }
        if start_date > end_date {
            return Err(AppError::bad_request(
                "Range start must not be after range end",
                json!({ "start_date": start_date, "end_date": end_date }),
            ));
        }

        let mappings = self.mappings.find_by_owner(owner_id).await?;
        if mappings.is_empty() {
            return Ok(BTreeMap::new());
        }
        let mapping_ids: Vec<i64> = mappings.iter().map(|m| m.id).collect();

        let start = start_date.and_time(NaiveTime::MIN).and_utc();
        let end = end_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| {
                AppError::bad_request("End date out of range", json!({ "end_date": end_date }))
            })?
            .and_time(NaiveTime::MIN)
            .and_utc();

        let events = self
            .clicks
            .find_by_mappings_and_range(&mapping_ids, start, end)
            .await?;

        Ok(group_by_date(&events))
    }
}

/// Groups events by the calendar date of `occurred_at`, counting per date.
fn group_by_date(events: &[ClickEvent]) -> BTreeMap<NaiveDate, i64> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.occurred_at.date_naive()).or_insert(0) += 1;
    }
    counts
}
