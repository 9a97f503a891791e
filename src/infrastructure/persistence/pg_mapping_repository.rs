//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mapping storage.
///
/// Token uniqueness is enforced by the `url_mappings_short_token_key` constraint,
/// and the click counter is incremented in a single `UPDATE`, so both contract
/// points of [`MappingRepository`] hold under concurrency without application-side
/// coordination.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    original_url: String,
    short_token: String,
    owner_id: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(
            row.id,
            row.original_url,
            row.short_token,
            row.owner_id,
            row.click_count,
            row.created_at,
        )
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_token, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_token, owner_id, click_count, created_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_token)
        .bind(&new_mapping.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_token(&self, short_token: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_token, owner_id, click_count, created_at
            FROM url_mappings
            WHERE short_token = $1
            "#,
        )
        .bind(short_token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, short_token, owner_id, click_count, created_at
            FROM url_mappings
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn increment_click_count(&self, id: i64) -> Result<i64, AppError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE url_mappings
            SET click_count = click_count + 1
            WHERE id = $1
            RETURNING click_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        count.ok_or_else(|| AppError::not_found("Mapping not found", json!({ "id": id })))
    }
}
