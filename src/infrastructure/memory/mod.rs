//! In-memory store adapters.
//!
//! Same contract as the PostgreSQL adapters: a unique token constraint on insert
//! and an atomic click counter increment (one mutation under the table lock).
//! Used by integration tests and suitable for running the service without a
//! database.

mod click_store;
mod mapping_store;

pub use click_store::InMemoryClickEventRepository;
pub use mapping_store::InMemoryMappingRepository;
