//! Database adapters
//!
//! Implementations of repository traits using SeaORM. The backend (SQLite or
//! PostgreSQL) is chosen by the connection URL.

pub mod person_repo;
pub mod schema;


pub use person_repo::SeaOrmPersonRepository;
pub use schema::ensure_schema;
