//! PostgreSQL implementation of the click event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickEventRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only click event log.
pub struct PgClickEventRepository {
    pool: Arc<PgPool>,
}

impl PgClickEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickEventRow {
    id: i64,
    mapping_id: i64,
    occurred_at: DateTime<Utc>,
}

impl From<ClickEventRow> for ClickEvent {
    fn from(row: ClickEventRow) -> Self {
        ClickEvent::new(row.id, row.mapping_id, row.occurred_at)
    }
}

#[async_trait]
impl ClickEventRepository for PgClickEventRepository {
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError> {
        let row = sqlx::query_as::<_, ClickEventRow>(
            r#"
            INSERT INTO click_events (mapping_id, occurred_at)
            VALUES ($1, $2)
            RETURNING id, mapping_id, occurred_at
            "#,
        )
        .bind(new_event.mapping_id)
        .bind(new_event.occurred_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_mapping_and_range(
        &self,
        mapping_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError> {
        let rows = sqlx::query_as::<_, ClickEventRow>(
            r#"
            SELECT id, mapping_id, occurred_at
            FROM click_events
            WHERE mapping_id = $1
              AND occurred_at >= $2
              AND occurred_at <= $3
            ORDER BY occurred_at
            "#,
        )
        .bind(mapping_id)
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ClickEvent::from).collect())
    }

    async fn find_by_mappings_and_range(
        &self,
        mapping_ids: &[i64],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError> {
        let rows = sqlx::query_as::<_, ClickEventRow>(
            r#"
            SELECT id, mapping_id, occurred_at
            FROM click_events
            WHERE mapping_id = ANY($1)
              AND occurred_at >= $2
              AND occurred_at < $3
            ORDER BY occurred_at
            "#,
        )
        .bind(mapping_ids)
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ClickEvent::from).collect())
    }
}
