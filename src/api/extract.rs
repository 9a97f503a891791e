//! Extractor for the authenticated owner identity.
//!
//! Identity and session management are a collaborator concern: the upstream
//! layer (a trusted reverse proxy or gateway) authenticates the request and
//! forwards an opaque user identifier in the `x-user-id` header. The engine
//! never inspects the identifier's structure; two identical strings are the
//! same owner.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::error::AppError;

/// Header carrying the already-authenticated opaque owner identifier.
pub const OWNER_ID_HEADER: &str = "x-user-id";

/// Opaque identifier of the authenticated caller.
#[derive(Debug, Clone)]
pub struct OwnerId(pub String);

impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner = parts
            .headers
            .get(OWNER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::bad_request(
                    "Missing authenticated user identity",
                    json!({ "header": OWNER_ID_HEADER }),
                )
            })?;

        Ok(OwnerId(owner.to_string()))
    }
}
