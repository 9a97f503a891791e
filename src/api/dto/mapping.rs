//! DTOs for mapping creation and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to create a short mapping for one URL.
///
/// The URL is passed through to the engine as-is; this core does not validate it
/// as a well-formed URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMappingRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}

/// A mapping as exposed to API callers.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub id: i64,
    pub original_url: String,
    pub short_token: String,
    pub short_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
}

impl MappingResponse {
    /// Builds the response view, joining the service base URL with the token.
    pub fn from_mapping(mapping: UrlMapping, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), mapping.short_token);
        Self {
            id: mapping.id,
            original_url: mapping.original_url,
            short_token: mapping.short_token,
            short_url,
            click_count: mapping.click_count,
            created_at: mapping.created_at,
            owner_id: mapping.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_short_url_joins_base_and_token() {
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "Ab3xYz09".to_string(),
            "alice".to_string(),
            0,
            Utc::now(),
        );

        let view = MappingResponse::from_mapping(mapping, "https://s.example.com/");
        assert_eq!(view.short_url, "https://s.example.com/Ab3xYz09");
    }
}
