//! Mapping creation, resolution, and per-owner listing.

use std::sync::Arc;

use crate::domain::entities::{NewClickEvent, NewUrlMapping, UrlMapping};
use crate::domain::repositories::{ClickEventRepository, MappingRepository};
use crate::error::AppError;
use crate::utils::token_generator::generate_token;
use chrono::Utc;
use serde_json::json;

/// Collision retry budget for token generation. With a 62^8 token space this is
/// effectively unreachable; exceeding it is surfaced as a hard failure rather
/// than retried indefinitely.
const MAX_TOKEN_ATTEMPTS: usize = 5;

/// Outcome of resolving a short token.
///
/// `click_count` is the post-increment value when click accounting succeeded and
/// the last known value when it did not.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub original_url: String,
    pub click_count: i64,
}

/// Service orchestrating mapping creation, token resolution, and listing.
///
/// Owns all business rules around the two stores: input validation, bounded
/// collision retry against the store's unique token constraint, and click
/// accounting on resolution.
pub struct MappingService {
    mappings: Arc<dyn MappingRepository>,
    clicks: Arc<dyn ClickEventRepository>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(mappings: Arc<dyn MappingRepository>, clicks: Arc<dyn ClickEventRepository>) -> Self {
        Self { mappings, clicks }
    }

    /// Creates a mapping from a fresh random token to `original_url`.
    ///
    /// Generates an 8-character token and inserts the mapping. If the store
    /// reports a unique constraint violation on the token, retries with a fresh
    /// token up to 5 attempts total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` or `owner_id` is empty
    /// or all-whitespace.
    /// Returns [`AppError::TokenSpaceExhausted`] if every attempt collided.
    /// Returns [`AppError::Internal`] on storage or randomness failures.
    pub async fn create_mapping(
        &self,
        original_url: &str,
        owner_id: &str,
    ) -> Result<UrlMapping, AppError> {
        if original_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Original URL cannot be empty",
                json!({}),
            ));
        }
        if owner_id.trim().is_empty() {
            return Err(AppError::bad_request("Owner cannot be empty", json!({})));
        }

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let short_token = generate_token()?;

            let new_mapping = NewUrlMapping {
                original_url: original_url.to_string(),
                short_token,
                owner_id: owner_id.to_string(),
            };

            match self.mappings.insert(new_mapping).await {
                Ok(mapping) => {
                    tracing::info!(
                        mapping_id = mapping.id,
                        short_token = %mapping.short_token,
                        "created url mapping"
                    );
                    return Ok(mapping);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "short token collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::token_space_exhausted(
            "Failed to generate a unique short token",
            json!({ "attempts": MAX_TOKEN_ATTEMPTS }),
        ))
    }

    /// Resolves a short token to its original URL and records the click.
    ///
    /// Click accounting is an atomic store-side counter increment followed by one
    /// click event append. The append is skipped when the increment fails so the
    /// event log never runs ahead of the counter. A failure in either step is
    /// logged and counted, but never blocks the redirect: the original URL is
    /// returned regardless.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the token is empty or all-whitespace.
    /// Returns [`AppError::NotFound`] if no mapping has this token.
    pub async fn resolve_token(&self, short_token: &str) -> Result<Resolution, AppError> {
        if short_token.trim().is_empty() {
            return Err(AppError::bad_request(
                "Short token cannot be empty",
                json!({}),
            ));
        }

        let mapping = self
            .mappings
            .find_by_token(short_token)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short token not found", json!({ "token": short_token }))
            })?;

        let mut click_count = mapping.click_count;

        match self.mappings.increment_click_count(mapping.id).await {
            Ok(new_count) => {
                click_count = new_count;

                let event = NewClickEvent {
                    mapping_id: mapping.id,
                    occurred_at: Utc::now(),
                };
                if let Err(e) = self.clicks.append(event).await {
                    tracing::error!(
                        mapping_id = mapping.id,
                        error = %e,
                        "failed to append click event"
                    );
                    metrics::counter!("url_mapper_clicks_lost_total").increment(1);
                }
            }
            Err(e) => {
                tracing::error!(
                    mapping_id = mapping.id,
                    error = %e,
                    "failed to increment click count"
                );
                metrics::counter!("url_mapper_clicks_lost_total").increment(1);
            }
        }

        tracing::debug!(
            short_token,
            click_count,
            "resolved short token"
        );

        Ok(Resolution {
            original_url: mapping.original_url,
            click_count,
        })
    }

    /// Returns all mappings created by the given owner. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `owner_id` is empty or all-whitespace.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_mappings_by_owner(&self, owner_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        if owner_id.trim().is_empty() {
            return Err(AppError::bad_request("Owner cannot be empty", json!({})));
        }

        self.mappings.find_by_owner(owner_id).await
    }
}
