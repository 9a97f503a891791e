//! In-memory implementation of the click event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Mutex;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickEventRepository;
use crate::error::AppError;

#[derive(Default)]
struct ClickLog {
    next_id: i64,
    rows: Vec<ClickEvent>,
}

/// In-memory append-only click event log.
#[derive(Default)]
pub struct InMemoryClickEventRepository {
    log: Mutex<ClickLog>,
}

impl InMemoryClickEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> AppError {
    AppError::internal("Click log lock poisoned", json!({}))
}

#[async_trait]
impl ClickEventRepository for InMemoryClickEventRepository {
    async fn append(&self, new_event: NewClickEvent) -> Result<ClickEvent, AppError> {
        let mut log = self.log.lock().map_err(|_| lock_poisoned())?;

        log.next_id += 1;
        let event = ClickEvent::new(log.next_id, new_event.mapping_id, new_event.occurred_at);
        log.rows.push(event.clone());

        Ok(event)
    }

    async fn find_by_mapping_and_range(
        &self,
        mapping_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError> {
        let log = self.log.lock().map_err(|_| lock_poisoned())?;

        Ok(log
            .rows
            .iter()
            .filter(|ev| {
                ev.mapping_id == mapping_id && ev.occurred_at >= start && ev.occurred_at <= end
            })
            .cloned()
            .collect())
    }

    async fn find_by_mappings_and_range(
        &self,
        mapping_ids: &[i64],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClickEvent>, AppError> {
        let log = self.log.lock().map_err(|_| lock_poisoned())?;

        Ok(log
            .rows
            .iter()
            .filter(|ev| {
                mapping_ids.contains(&ev.mapping_id)
                    && ev.occurred_at >= start
                    && ev.occurred_at < end
            })
            .cloned()
            .collect())
    }
}
