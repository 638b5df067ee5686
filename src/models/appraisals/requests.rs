use serde::Deserialize;
use ts_rs::TS;

use crate::models::Division;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct ScoreInput {
    pub sub_criterion_id: i64,
    pub value: f64,
}

/// Appraisal submission; all score entries are stored together or not at all
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct CreateAppraisalRequest {
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
    pub scores: Vec<ScoreInput>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalListParams {
    pub division: Option<Division>,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalStatusParams {
    pub division: Option<Division>,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalExistsParams {
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
}
