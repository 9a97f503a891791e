//! Repository trait for the append-only click event log.

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for click event storage.
///
/// Events are append-only and immutable. The two range queries deliberately use
/// different boundary policies, and both are observable caller-facing behavior:
///
/// - [`find_by_mapping_and_range`](ClickEventRepository::find_by_mapping_and_range)
///   includes events at both the lower and the upper bound instant.
/// - [`find_by_mappings_and_range`](ClickEventRepository::find_by_mappings_and_range)
///   includes the lower bound but excludes the upper bound. Callers pass the start
///   of the day after an inclusive end date.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickEventRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::InMemoryClickEventRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickEventRepository: Send + Sync {
    /// Appends one click event. The insert is durable before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError>;

    /// Returns all events of one mapping with `occurred_at` in `[start, end]`
    /// (inclusive on both bounds).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_mapping_and_range(
        &self,
        mapping_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError>;

    /// Returns all events of any of the given mappings with `occurred_at` in
    /// `[start, end)` (half-open upper bound).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_mappings_and_range(
        &self,
        mapping_ids: &[i64],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError>;
}
