//! SeaORM adapter for PersonRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, NotSet, Set,
    TransactionTrait,
};

use crate::domain::entities::{NewPerson, Person, PersonChanges, PersonId};
use crate::domain::ports::PersonRepository;
use crate::entity::users;
use crate::error::DomainError;

/// SeaORM implementation of PersonRepository
///
/// Works against whichever backend the connection was opened for. Every write
/// runs in its own transaction, which rolls back if dropped before commit.
pub struct SeaOrmPersonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        let results = users::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, person: &NewPerson) -> Result<Person, DomainError> {
        let model = users::ActiveModel {
            id: NotSet,
            firstname: Set(person.firstname.clone()),
            lastname: Set(person.lastname.clone()),
            date_of_birth: Set(person.date_of_birth),
            age: Set(person.age),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &PersonId,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(existing) = users::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active_model = existing.into_active_model();
        if let Some(firstname) = &changes.firstname {
            active_model.firstname = Set(firstname.clone());
        }
        if let Some(lastname) = &changes.lastname {
            active_model.lastname = Set(lastname.clone());
        }
        if let Some((date_of_birth, age)) = changes.date_of_birth {
            active_model.date_of_birth = Set(date_of_birth);
            active_model.age = Set(age);
        }

        let updated = active_model
            .update(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &PersonId) -> Result<Option<Person>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(existing) = users::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        existing
            .clone()
            .delete(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(existing.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for Person {
    fn from(model: users::Model) -> Self {
        Person {
            id: PersonId(model.id),
            firstname: model.firstname,
            lastname: model.lastname,
            date_of_birth: model.date_of_birth,
            age: model.age,
        }
    }
}
