//! URL mapping entity: the association between a short token and its target URL.

use chrono::{DateTime, Utc};

/// A durable mapping from an 8-character short token to an original URL.
///
/// `short_token` is unique across all mappings; `click_count` only ever grows and
/// is mutated exclusively through the store's atomic increment. Everything else is
/// immutable after creation.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_token: String,
    pub owner_id: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_token: String,
        owner_id: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_token,
            owner_id,
            click_count,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The store assigns `id` and `created_at`; `click_count` starts at zero.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_token: String,
    pub owner_id: String,
}
