//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewPerson, Person, PersonChanges, PersonId};
use crate::domain::ports::{Clock, PersonRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Person Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPersonRepository {
    people: Arc<RwLock<BTreeMap<PersonId, Person>>>,
    last_id: Arc<RwLock<i32>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a person for testing
    pub fn with_person(self, person: Person) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(person.id.0);
            self.people.write().unwrap().insert(person.id, person);
        }
        self
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        let people = self.people.read().unwrap();
        Ok(people.values().cloned().collect())
    }

    async fn create(&self, new_person: &NewPerson) -> Result<Person, DomainError> {
        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;

        let person = Person {
            id: PersonId(*last_id),
            firstname: new_person.firstname.clone(),
            lastname: new_person.lastname.clone(),
            date_of_birth: new_person.date_of_birth,
            age: new_person.age,
        };

        self.people
            .write()
            .unwrap()
            .insert(person.id, person.clone());
        Ok(person)
    }

    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, DomainError> {
        let mut people = self.people.write().unwrap();
        Ok(people.get_mut(id).map(|person| {
            if let Some(firstname) = &changes.firstname {
                person.firstname = firstname.clone();
            }
            if let Some(lastname) = &changes.lastname {
                person.lastname = lastname.clone();
            }
            if let Some((date_of_birth, age)) = changes.date_of_birth {
                person.date_of_birth = date_of_birth;
                person.age = age;
            }
            person.clone()
        }))
    }

    async fn delete(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        Ok(self.people.write().unwrap().remove(id))
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
