//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Mocks are hand-written in-memory implementations of the port traits rather
//! than generated ones, so tests can seed and inspect state directly.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
