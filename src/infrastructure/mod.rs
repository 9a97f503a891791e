//! Infrastructure layer: concrete store adapters.

pub mod memory;
pub mod persistence;
