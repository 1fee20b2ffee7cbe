//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod database;

pub use clock::SystemClock;
pub use database::{ensure_schema, SeaOrmPersonRepository};
