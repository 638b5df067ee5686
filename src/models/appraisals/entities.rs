use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Period;

/// Lowest value on the rating scale
pub const RATING_SCALE_MIN: f64 = 1.0;
/// Highest value on the rating scale
pub const RATING_SCALE_MAX: f64 = 5.0;

/// Raw score for one sub-criterion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct ScoreEntry {
    pub id: i64,
    pub appraisal_id: i64,
    pub sub_criterion_id: i64,
    pub value: f64,
}

/// Monthly appraisal of one employee. `final_score` is only ever written by
/// the ranking computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct Appraisal {
    pub id: i64,
    pub employee_id: i64,
    pub period: Period,
    pub final_score: Option<f64>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Performance band derived from a final score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub enum GradeBand {
    A, // Sangat Baik
    B, // Baik
    C, // Cukup
    D, // Kurang
}

impl GradeBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            GradeBand::A
        } else if score >= 70.0 {
            GradeBand::B
        } else if score >= 50.0 {
            GradeBand::C
        } else {
            GradeBand::D
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_band_thresholds() {
        assert_eq!(GradeBand::from_score(100.0), GradeBand::A);
        assert_eq!(GradeBand::from_score(85.0), GradeBand::A);
        assert_eq!(GradeBand::from_score(84.99), GradeBand::B);
        assert_eq!(GradeBand::from_score(70.0), GradeBand::B);
        assert_eq!(GradeBand::from_score(50.0), GradeBand::C);
        assert_eq!(GradeBand::from_score(49.9), GradeBand::D);
        assert_eq!(GradeBand::from_score(0.0), GradeBand::D);
    }
}
