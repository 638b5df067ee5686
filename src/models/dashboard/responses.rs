use serde::Serialize;
use ts_rs::TS;

use crate::models::{Division, Period};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DivisionCount {
    pub division: Division,
    pub employees: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardStatsResponse {
    pub total_employees: i64,
    pub total_criteria: i64,
    pub period: Period,
    pub appraisals_this_period: i64,
    pub division_stats: Vec<DivisionCount>,
}
