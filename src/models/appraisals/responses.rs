use serde::Serialize;
use ts_rs::TS;

use super::entities::{Appraisal, GradeBand, ScoreEntry};
use crate::models::criteria::entities::CriterionDirection;
use crate::models::employees::entities::Employee;
use crate::models::{Division, Period};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalResponse {
    pub appraisal: Appraisal,
    pub entries: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct EmployeeSummary {
    pub id: i64,
    pub personnel_number: String,
    pub name: String,
    pub division: Division,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            personnel_number: employee.personnel_number.clone(),
            name: employee.name.clone(),
            division: employee.division,
        }
    }
}

/// Row of the ranking table. `rank` and `grade` are set once the appraisal
/// has a final score.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalListItem {
    pub id: i64,
    pub employee: EmployeeSummary,
    pub period: Period,
    pub final_score: Option<f64>,
    pub rank: Option<i64>,
    pub grade: Option<GradeBand>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalSummary {
    pub total: i64,
    pub average: f64,
    pub max: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalListResponse {
    pub items: Vec<AppraisalListItem>,
    pub summary: AppraisalSummary,
}

/// Score entry with catalog context; the criterion fields are empty when the
/// sub-criterion was deleted after the appraisal was recorded.
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct ScoreEntryDetail {
    pub sub_criterion_id: i64,
    pub sub_criterion_name: Option<String>,
    pub criterion_id: Option<i64>,
    pub criterion_name: Option<String>,
    pub direction: Option<CriterionDirection>,
    pub value: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct CriterionMean {
    pub criterion_id: i64,
    pub name: String,
    pub direction: CriterionDirection,
    pub weight: f64,
    pub value: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalDetailResponse {
    pub appraisal: Appraisal,
    pub employee: EmployeeSummary,
    pub entries: Vec<ScoreEntryDetail>,
    pub criterion_means: Vec<CriterionMean>,
    pub grade: Option<GradeBand>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalStatusItem {
    pub employee: EmployeeSummary,
    pub appraised: bool,
    pub appraisal_id: Option<i64>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalStatusResponse {
    pub period: Period,
    pub items: Vec<AppraisalStatusItem>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "appraisal.ts")]
pub struct AppraisalExistsResponse {
    pub exists: bool,
}
