//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two collaborator stores the engine depends on. The
//! stores hold no business logic; invariants the engine cannot enforce alone
//! (token uniqueness, atomic click increments) are part of the trait contracts.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - durable token -> URL mappings
//! - [`ClickEventRepository`] - append-only click event log

pub mod click_repository;
pub mod mapping_repository;

pub use click_repository::ClickEventRepository;
pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use click_repository::MockClickEventRepository;
#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
