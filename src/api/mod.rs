//! API layer: REST handlers, DTOs, and the identity extractor.

pub mod dto;
pub mod extract;
pub mod handlers;
