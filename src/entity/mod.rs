//! SeaORM entity definitions
//!
//! Kept separate from the business models in `models`. The storage layer
//! works with these entities and converts them into business models.

pub mod prelude;

pub mod appraisals;
pub mod criteria;
pub mod employees;
pub mod score_entries;
pub mod sub_criteria;

use chrono::{DateTime, Utc};

pub(crate) fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
