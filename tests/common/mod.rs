#![allow(dead_code)]

use std::sync::Arc;

use url_mapper::application::services::{AnalyticsService, MappingService};
use url_mapper::infrastructure::memory::{
    InMemoryClickEventRepository, InMemoryMappingRepository,
};
use url_mapper::state::AppState;

/// Handles onto the backing stores so tests can seed and inspect data directly.
pub struct TestStores {
    pub mappings: Arc<InMemoryMappingRepository>,
    pub clicks: Arc<InMemoryClickEventRepository>,
}

/// Builds application state over fresh in-memory stores.
pub fn create_test_state() -> (AppState, TestStores) {
    let mappings = Arc::new(InMemoryMappingRepository::new());
    let clicks = Arc::new(InMemoryClickEventRepository::new());

    let mapping_service = Arc::new(MappingService::new(mappings.clone(), clicks.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(mappings.clone(), clicks.clone()));

    let state = AppState::new(
        mapping_service,
        analytics_service,
        "https://s.example.com".to_string(),
    );

    (state, TestStores { mappings, clicks })
}
