//! PostgreSQL store adapters.

pub mod pg_click_repository;
pub mod pg_mapping_repository;

pub use pg_click_repository::PgClickEventRepository;
pub use pg_mapping_repository::PgMappingRepository;
