//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The person record and the age derivation rule
//! - `ports`: Trait definitions for storage and the calendar

pub mod entities;
pub mod ports;
