//! DTOs for the analytics endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Instant range for per-token analytics. Both bounds are inclusive.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// Range start (RFC 3339 instant).
    pub start: DateTime<Utc>,
    /// Range end (RFC 3339 instant), inclusive.
    pub end: DateTime<Utc>,
}

/// Calendar date range for per-owner totals. Both dates are inclusive.
#[derive(Debug, Deserialize)]
pub struct TotalClicksQuery {
    /// First day of the range (ISO date).
    pub start_date: NaiveDate,
    /// Last day of the range (ISO date), inclusive of the whole day.
    pub end_date: NaiveDate,
}
