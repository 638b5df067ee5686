use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Division;

/// Whether a higher raw value is better (benefit) or worse (cost)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "criteria.ts")]
pub enum CriterionDirection {
    Benefit,
    Cost,
}

impl CriterionDirection {
    pub const BENEFIT: &'static str = "BENEFIT";
    pub const COST: &'static str = "COST";
}

impl<'de> Deserialize<'de> for CriterionDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CriterionDirection>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriterionDirection::Benefit => write!(f, "{}", Self::BENEFIT),
            CriterionDirection::Cost => write!(f, "{}", Self::COST),
        }
    }
}

impl std::str::FromStr for CriterionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            CriterionDirection::BENEFIT => Ok(CriterionDirection::Benefit),
            CriterionDirection::COST => Ok(CriterionDirection::Cost),
            _ => Err(format!("Invalid criterion direction: {s}")),
        }
    }
}

/// One ratable question under a criterion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct SubCriterion {
    pub id: i64,
    pub criterion_id: i64,
    pub name: String,
}

/// Weighted criterion of a division, with its sub-criteria
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct Criterion {
    pub id: i64,
    pub division: Division,
    pub name: String,
    pub weight: f64,
    pub direction: CriterionDirection,
    pub sub_criteria: Vec<SubCriterion>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
