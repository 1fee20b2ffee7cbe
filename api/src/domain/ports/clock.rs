//! Clock port
//!
//! Ages are derived against "today", which comes from here rather than from
//! the wall clock directly so tests can pin the date.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
