use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EmployeeService;
use crate::errors::KepswellError;
use crate::models::{
    ApiResponse, ErrorCode,
    employees::{requests::UpdateEmployeeRequest, responses::EmployeeResponse},
};
use crate::utils::validate::validate_name;

pub async fn update_employee(
    service: &EmployeeService,
    employee_id: i64,
    mut update: UpdateEmployeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update.name.take() {
        if let Err(msg) = validate_name(&name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::EmployeeInvalid, msg)));
        }
        update.name = Some(name.trim().to_string());
    }

    let storage = service.get_storage(request);

    match storage.update_employee(employee_id, update).await {
        Ok(Some(employee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EmployeeResponse { employee },
            "Employee updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EmployeeNotFound,
            "Employee not found",
        ))),
        // division change after appraisals were recorded
        Err(KepswellError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::EmployeeInvalid, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Employee update failed: {e}"),
            )),
        ),
    }
}
