//! Data models shared by the HTTP, service and storage layers.

pub mod appraisals;
pub mod auth;
pub mod common;
pub mod criteria;
pub mod dashboard;
pub mod employees;
pub mod rankings;

pub use common::{ApiResponse, Division, PaginationInfo, Period, normalize_page};

/// Process start time, used for startup diagnostics
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Numeric codes carried in every `ApiResponse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    CriterionNotFound = 2000,
    CriterionInvalid = 2001,
    SubCriterionNotFound = 2002,

    EmployeeNotFound = 3000,
    EmployeeAlreadyExists = 3001,
    EmployeeInvalid = 3002,
    EmployeeInactive = 3003,

    AppraisalNotFound = 4000,
    AppraisalAlreadyExists = 4001,
    AppraisalInvalid = 4002,

    RankingNotConfigured = 5000,
    RankingNoData = 5001,
    RankingInProgress = 5002,
    RankingFailed = 5003,
}
