//! Core business entities.

pub mod click;
pub mod mapping;

pub use click::{ClickEvent, NewClickEvent};
pub use mapping::{NewUrlMapping, UrlMapping};
