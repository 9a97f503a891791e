//! Shared utilities.

pub mod token_generator;
