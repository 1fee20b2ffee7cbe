//! Person domain entity
//!
//! The single record kept by the service: a named individual with a birth date
//! and an age snapshot taken when the birth date was last written.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Unique identifier for a person, assigned by storage on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub i32);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of completed years between `date_of_birth` and `today`.
///
/// One year is subtracted when the birthday has not come round yet this year,
/// comparing `(month, day)` pairs. A 29 February birthday therefore counts as
/// reached on 1 March in non-leap years. No validation: a birth date in the
/// future yields a negative age.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}

/// A stored person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
    /// Snapshot from the last write that set `date_of_birth`; not refreshed on read
    pub age: i32,
}

/// Data needed to insert a new person, age already derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub firstname: String,
    pub lastname: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
}

impl NewPerson {
    /// Build an insertable record, deriving `age` as of `today`
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            date_of_birth,
            age: age_on(date_of_birth, today),
        }
    }
}

/// Caller-supplied partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonUpdate {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl PersonUpdate {
    /// Resolve against `today`: a new birth date carries its recomputed age.
    pub fn resolve(self, today: NaiveDate) -> PersonChanges {
        PersonChanges {
            firstname: self.firstname,
            lastname: self.lastname,
            date_of_birth: self.date_of_birth.map(|dob| (dob, age_on(dob, today))),
        }
    }
}

/// Changes ready to be written to storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// New birth date paired with the age derived from it
    pub date_of_birth: Option<(NaiveDate, i32)>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.date_of_birth.is_none()
    }
}
