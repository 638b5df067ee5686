pub mod appraisals;
pub mod criteria;
pub mod dashboard;
pub mod employees;
pub mod rankings;

pub use appraisals::AppraisalService;
pub use criteria::CriteriaService;
pub use dashboard::DashboardService;
pub use employees::EmployeeService;
pub use rankings::RankingService;
