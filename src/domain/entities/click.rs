//! Click event entity: one durable record per redirect resolution.

use chrono::{DateTime, Utc};

/// A single recorded resolution of a short token.
///
/// Append-only: created exactly once per successful resolution, never updated or
/// deleted. `mapping_id` is a lookup key into the owning mapping, not a live handle.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub id: i64,
    pub mapping_id: i64,
    pub occurred_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    pub fn new(id: i64, mapping_id: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id,
            mapping_id,
            occurred_at,
        }
    }
}

/// Input data for appending a new click event.
#[derive(Debug, Clone)]
pub struct NewClickEvent {
    pub mapping_id: i64,
    pub occurred_at: DateTime<Utc>,
}
