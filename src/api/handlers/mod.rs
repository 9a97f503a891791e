//! REST API handlers.

pub mod analytics;
pub mod health;
pub mod mappings;
pub mod redirect;
pub mod shorten;

pub use analytics::{analytics_handler, total_clicks_handler};
pub use health::health_handler;
pub use mappings::my_mappings_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
