//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewPerson, Person, PersonChanges, PersonId};
use crate::error::DomainError;

/// Repository for Person records
///
/// Each method is one atomic round trip to storage. Lookups that miss return
/// `Ok(None)`; callers decide whether that is an error.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List every stored person in storage order
    async fn find_all(&self) -> Result<Vec<Person>, DomainError>;

    /// Insert a new person, returning it with its assigned ID
    async fn create(&self, person: &NewPerson) -> Result<Person, DomainError>;

    /// Apply changes to an existing person
    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, DomainError>;

    /// Remove a person, returning the removed record
    async fn delete(&self, id: &PersonId) -> Result<Option<Person>, DomainError>;
}
