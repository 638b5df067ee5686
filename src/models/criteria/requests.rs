use serde::Deserialize;
use ts_rs::TS;

use super::entities::CriterionDirection;
use crate::models::Division;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CriteriaQuery {
    pub division: Division,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreateCriterionRequest {
    pub division: Division,
    pub name: String,
    pub weight: f64,
    pub direction: CriterionDirection,
}

/// Division is fixed once a criterion exists
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct UpdateCriterionRequest {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub direction: Option<CriterionDirection>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreateSubCriterionRequest {
    pub name: String,
}
