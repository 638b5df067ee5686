use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Division;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct Employee {
    pub id: i64,
    pub division: Division,
    pub personnel_number: String,
    pub name: String,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
