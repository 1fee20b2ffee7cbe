//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::ensure_schema;
use crate::domain::entities::{Person, PersonId};

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Create a test person with default values (age as of 2024-06-14)
pub fn test_person() -> Person {
    Person {
        id: PersonId(1),
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        date_of_birth: date(1990, 6, 15),
        age: 33,
    }
}

/// Open a fresh in-memory SQLite database with the schema applied
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&db).await.expect("Failed to create schema");
    db
}
