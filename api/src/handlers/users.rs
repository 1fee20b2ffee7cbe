//! User handlers
//!
//! Endpoints for listing, creating, updating and deleting person records.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Person, PersonId, PersonUpdate};
use crate::error::AppError;
use crate::AppState;

/// A person as returned by the API
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        PersonResponse {
            id: person.id.0,
            firstname: person.firstname,
            lastname: person.lastname,
            date_of_birth: person.date_of_birth,
            age: person.age,
        }
    }
}

/// Request to create a person. The age is always derived, never accepted.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
}

/// Query parameters for deleting a person
#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    pub user_id: i32,
}

/// Confirmation returned after a delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub detail: String,
    /// The record that was removed
    pub user: PersonResponse,
}

/// GET /users
///
/// List all people.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let people = state.person_service.list().await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// POST /users/create
///
/// Create a person; the response carries the assigned id and derived age.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state
        .person_service
        .create(&request.firstname, &request.lastname, request.date_of_birth)
        .await?;

    Ok(Json(person.into()))
}

/// PUT /users/:id
///
/// Partially update a person. Omitted or null fields are left as they are.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PersonUpdate>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state
        .person_service
        .update(&PersonId(id), request)
        .await?;

    Ok(Json(person.into()))
}

/// DELETE /user?user_id=:id
///
/// Delete a person.
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<DeleteUserQuery>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let person = state
        .person_service
        .delete(&PersonId(query.user_id))
        .await?;

    Ok(Json(DeleteUserResponse {
        detail: "User deleted".to_string(),
        user: person.into(),
    }))
}
