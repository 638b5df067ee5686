use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppraisalService;
use crate::models::{
    ApiResponse, ErrorCode, Period,
    appraisals::{
        requests::AppraisalStatusParams,
        responses::{AppraisalStatusItem, AppraisalStatusResponse, EmployeeSummary},
    },
};

/// Active employees of the period with their appraisal state
pub async fn appraisal_status(
    service: &AppraisalService,
    query: AppraisalStatusParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, e.message())));
        }
    };

    let storage = service.get_storage(request);

    let employees = match storage.list_employees(query.division).await {
        Ok(employees) => employees,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve employees: {e}"),
                )),
            );
        }
    };

    let appraised: HashMap<i64, i64> = match storage.list_appraisals(query.division, period).await
    {
        Ok(rows) => rows
            .into_iter()
            .map(|(appraisal, employee)| (employee.id, appraisal.id))
            .collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve appraisals: {e}"),
                )),
            );
        }
    };

    let items = employees
        .iter()
        .filter(|e| e.active)
        .map(|employee| {
            let appraisal_id = appraised.get(&employee.id).copied();
            AppraisalStatusItem {
                employee: EmployeeSummary::from(employee),
                appraised: appraisal_id.is_some(),
                appraisal_id,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AppraisalStatusResponse { period, items },
        "Appraisal status retrieved successfully",
    )))
}
