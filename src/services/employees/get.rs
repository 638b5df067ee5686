use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EmployeeService;
use crate::models::{ApiResponse, ErrorCode, employees::responses::EmployeeResponse};

pub async fn get_employee(
    service: &EmployeeService,
    employee_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_employee_by_id(employee_id).await {
        Ok(Some(employee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EmployeeResponse { employee },
            "Employee retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EmployeeNotFound,
            "Employee not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve employee: {e}"),
            )),
        ),
    }
}
