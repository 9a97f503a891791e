//! Request and response DTOs for the REST API.

pub mod analytics;
pub mod health;
pub mod mapping;

pub use analytics::{AnalyticsQuery, TotalClicksQuery};
pub use health::HealthResponse;
pub use mapping::{CreateMappingRequest, MappingResponse};
