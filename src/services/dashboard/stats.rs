use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode, Period,
    dashboard::responses::{DashboardStatsResponse, DivisionCount},
};
use crate::storage::Storage;

async fn collect_stats(storage: &dyn Storage, period: Period) -> Result<DashboardStatsResponse> {
    let total_employees = storage.count_employees().await?;
    let total_criteria = storage.count_criteria().await?;
    let appraisals_this_period = storage.count_appraisals_in_period(period).await?;
    let division_stats = storage
        .count_employees_by_division()
        .await?
        .into_iter()
        .map(|(division, employees)| DivisionCount {
            division,
            employees,
        })
        .collect();

    Ok(DashboardStatsResponse {
        total_employees,
        total_criteria,
        period,
        appraisals_this_period,
        division_stats,
    })
}

/// Headline numbers for the current month
pub async fn get_stats(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let period = Period::containing(chrono::Utc::now());

    match collect_stats(storage.as_ref(), period).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Dashboard statistics retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve dashboard statistics: {e}"),
            )),
        ),
    }
}
