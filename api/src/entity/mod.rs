//! SeaORM entities
//!
//! Table models used by the database adapters. Domain code never sees these
//! directly; adapters convert them into `domain::entities` types.

pub mod users;
