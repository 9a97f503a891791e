//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

#[derive(Default)]
struct MappingTable {
    next_id: i64,
    rows: HashMap<i64, UrlMapping>,
    by_token: HashMap<String, i64>,
}

/// In-memory mapping store backed by a mutex-guarded table.
///
/// `by_token` plays the role of the database unique index: an insert with an
/// existing token fails with [`AppError::Conflict`] without touching the table.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    table: Mutex<MappingTable>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> AppError {
    AppError::internal("Mapping table lock poisoned", json!({}))
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut table = self.table.lock().map_err(|_| lock_poisoned())?;

        if table.by_token.contains_key(&new_mapping.short_token) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_mappings_short_token_key" }),
            ));
        }

        table.next_id += 1;
        let id = table.next_id;
        let mapping = UrlMapping::new(
            id,
            new_mapping.original_url,
            new_mapping.short_token.clone(),
            new_mapping.owner_id,
            0,
            Utc::now(),
        );

        table.by_token.insert(new_mapping.short_token, id);
        table.rows.insert(id, mapping.clone());

        Ok(mapping)
    }

    async fn find_by_token(&self, short_token: &str) -> Result<Option<UrlMapping>, AppError> {
        let table = self.table.lock().map_err(|_| lock_poisoned())?;

        Ok(table
            .by_token
            .get(short_token)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        let table = self.table.lock().map_err(|_| lock_poisoned())?;

        Ok(table
            .rows
            .values()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn increment_click_count(&self, id: i64) -> Result<i64, AppError> {
        let mut table = self.table.lock().map_err(|_| lock_poisoned())?;

        let mapping = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Mapping not found", json!({ "id": id })))?;

        mapping.click_count += 1;
        Ok(mapping.click_count)
    }
}
