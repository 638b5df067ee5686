use serde::{Deserialize, Serialize};

use crate::models::appraisals::entities::ScoreEntry;
use crate::models::{Division, Period};

/// (division, month, year) over which one ranking run operates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RankingScope {
    pub division: Division,
    pub period: Period,
}

impl std::fmt::Display for RankingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.division, self.period)
    }
}

/// One appraisal in scope with its raw score entries
#[derive(Debug, Clone, PartialEq)]
pub struct RankingInput {
    pub appraisal_id: i64,
    pub entries: Vec<ScoreEntry>,
}

/// Final score computed for one appraisal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedAppraisal {
    pub appraisal_id: i64,
    pub final_score: f64,
}
