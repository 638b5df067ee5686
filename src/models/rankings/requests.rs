use serde::Deserialize;
use ts_rs::TS;

use crate::models::Division;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "ranking.ts")]
pub struct ComputeRankingRequest {
    pub division: Division,
    pub month: i32,
    pub year: i32,
}
