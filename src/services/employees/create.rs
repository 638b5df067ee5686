use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EmployeeService;
use crate::errors::KepswellError;
use crate::models::{
    ApiResponse, ErrorCode,
    employees::{requests::CreateEmployeeRequest, responses::EmployeeResponse},
};
use crate::utils::validate::{validate_name, validate_personnel_number};

pub async fn create_employee(
    service: &EmployeeService,
    mut employee: CreateEmployeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    employee.personnel_number = employee.personnel_number.trim().to_string();

    if let Err(msg) = validate_personnel_number(&employee.personnel_number) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmployeeInvalid, msg)));
    }

    if let Err(msg) = validate_name(&employee.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmployeeInvalid, msg)));
    }
    employee.name = employee.name.trim().to_string();

    let storage = service.get_storage(request);

    match storage.create_employee(employee).await {
        Ok(employee) => {
            info!(
                "Employee {} ({}) registered in {}",
                employee.id, employee.personnel_number, employee.division
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EmployeeResponse { employee },
                "Employee created successfully",
            )))
        }
        Err(KepswellError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::EmployeeAlreadyExists, msg))),
        Err(e) => {
            error!("Employee creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Employee creation failed: {e}"),
                )),
            )
        }
    }
}
