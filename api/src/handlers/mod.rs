//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod users;

pub use users::{create_user, delete_user, list_users, update_user};
