//! Application services orchestrating the domain stores.

pub mod analytics_service;
pub mod mapping_service;

pub use analytics_service::{AnalyticsService, DailyClicks};
pub use mapping_service::{MappingService, Resolution};
