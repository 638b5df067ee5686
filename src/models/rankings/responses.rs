use serde::Serialize;
use ts_rs::TS;

use crate::models::{Division, Period};

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "ranking.ts")]
pub struct ComputeRankingResponse {
    pub division: Division,
    pub period: Period,
    pub employees_ranked: i64,
}
