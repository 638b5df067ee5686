use serde::Serialize;
use ts_rs::TS;

use super::entities::Employee;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "employee.ts")]
pub struct EmployeeListResponse {
    pub items: Vec<Employee>,
    pub pagination: PaginationInfo,
}
