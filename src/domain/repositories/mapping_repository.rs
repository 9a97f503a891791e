//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for durable URL mapping storage.
///
/// The store is dumb persistence: all business rules live in the services. Two
/// contract points matter for correctness and must hold in every implementation:
///
/// - `short_token` uniqueness is enforced by the store itself (a unique
///   constraint), never by a check-then-insert in the caller.
/// - `increment_click_count` is atomic with respect to concurrent calls on the
///   same mapping; a read-modify-write that can lose increments violates the
///   contract.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::InMemoryMappingRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping with `click_count = 0` and a store-assigned id and
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short token already exists.
    /// Returns [`AppError::Internal`] on other storage errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_token(&self, short_token: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Returns all mappings created by the given owner. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<UrlMapping>, AppError>;

    /// Atomically increments the click count of a mapping and returns the
    /// post-increment value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_click_count(&self, id: i64) -> Result<i64, AppError>;
}
