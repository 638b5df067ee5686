use serde::Deserialize;
use ts_rs::TS;

use crate::models::Division;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct CreateEmployeeRequest {
    pub personnel_number: String,
    pub name: String,
    pub division: Division,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub division: Option<Division>,
    pub active: Option<bool>,
}

/// Employee list query (HTTP and storage)
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct EmployeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub division: Option<Division>,
    pub active: Option<bool>,
    pub search: Option<String>,
}
