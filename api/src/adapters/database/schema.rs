//! Table bootstrap
//!
//! Creates the `users` table from its SeaORM entity when it is missing.
//! There are no migrations: an existing table is left as it is.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::users;
use crate::error::DomainError;

/// Create all tables the service needs, skipping those that already exist
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(users::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!(backend = ?backend, "Schema ready");
    Ok(())
}
