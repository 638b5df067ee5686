use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{KepswellError, Result};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// Appraisal period. Months are zero-based (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "period.ts")]
pub struct Period {
    pub month: i32,
    pub year: i32,
}

impl Period {
    pub fn new(month: i32, year: i32) -> Result<Self> {
        if !(0..=11).contains(&month) {
            return Err(KepswellError::validation(format!(
                "Month must be between 0 and 11, got {month}"
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(KepswellError::validation(format!(
                "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
        Ok(Self { month, year })
    }

    /// Period containing the given instant
    pub fn containing(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        use chrono::Datelike;
        Self {
            month: datetime.month0() as i32,
            year: datetime.year(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
