//! Person service
//!
//! The record store: list, create, update and delete people. Ages are derived
//! here, on the write path, from the injected clock.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{NewPerson, Person, PersonId, PersonUpdate};
use crate::domain::ports::{Clock, PersonRepository};
use crate::error::{AppError, DomainError};

/// Service for managing person records
pub struct PersonService<PR>
where
    PR: PersonRepository,
{
    people: Arc<PR>,
    clock: Arc<dyn Clock>,
}

impl<PR> PersonService<PR>
where
    PR: PersonRepository,
{
    pub fn new(people: Arc<PR>, clock: Arc<dyn Clock>) -> Self {
        Self { people, clock }
    }

    /// List every person in storage order
    pub async fn list(&self) -> Result<Vec<Person>, AppError> {
        let people = self.people.find_all().await?;
        tracing::debug!(count = people.len(), "Listed people");
        Ok(people)
    }

    /// Create a person, deriving their age as of today
    pub async fn create(
        &self,
        firstname: &str,
        lastname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<Person, AppError> {
        let new_person = NewPerson::new(firstname, lastname, date_of_birth, self.clock.today());
        let person = self.people.create(&new_person).await?;

        tracing::info!(person_id = %person.id, age = person.age, "Created person");
        Ok(person)
    }

    /// Apply a partial update
    ///
    /// Only supplied fields change. The age is recomputed when, and only when,
    /// a new date of birth is supplied; otherwise the stored snapshot is kept.
    pub async fn update(&self, id: &PersonId, update: PersonUpdate) -> Result<Person, AppError> {
        let changes = update.resolve(self.clock.today());

        let person = self
            .people
            .update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            person_id = %person.id,
            age_recomputed = changes.date_of_birth.is_some(),
            "Updated person"
        );
        Ok(person)
    }

    /// Delete a person, returning the removed record
    pub async fn delete(&self, id: &PersonId) -> Result<Person, AppError> {
        let person = self.people.delete(id).await?.ok_or_else(|| not_found(id))?;

        tracing::info!(person_id = %person.id, "Deleted person");
        Ok(person)
    }
}

fn not_found(id: &PersonId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("User {} not found", id)))
}
