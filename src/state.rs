//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, MappingService};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub analytics_service: Arc<AnalyticsService>,
    /// Public base URL joined with tokens when rendering short URLs.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        mapping_service: Arc<MappingService>,
        analytics_service: Arc<AnalyticsService>,
        base_url: String,
    ) -> Self {
        Self {
            mapping_service,
            analytics_service,
            base_url,
        }
    }
}
