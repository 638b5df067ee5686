use serde::Serialize;
use ts_rs::TS;

use super::entities::{Criterion, SubCriterion};
use crate::models::Division;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CriterionResponse {
    pub criterion: Criterion,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CriteriaListResponse {
    pub division: Division,
    pub total_weight: f64,
    pub items: Vec<Criterion>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct SubCriterionResponse {
    pub sub_criterion: SubCriterion,
}
