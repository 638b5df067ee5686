use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AppraisalService;
use crate::errors::KepswellError;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, Period,
    appraisals::{
        requests::{CreateAppraisalRequest, ScoreInput},
        responses::AppraisalResponse,
    },
    criteria::entities::Criterion,
};
use crate::storage::NewAppraisal;
use crate::utils::validate::validate_score_value;

/// Checks a submission against the employee's division catalog: every
/// sub-criterion exactly once, nothing from other divisions, values on the
/// rating scale.
pub(crate) fn check_submission(catalog: &[Criterion], scores: &[ScoreInput]) -> Result<(), String> {
    if scores.is_empty() {
        return Err("At least one score is required".to_string());
    }

    let expected: HashSet<i64> = catalog
        .iter()
        .flat_map(|c| c.sub_criteria.iter().map(|s| s.id))
        .collect();

    let mut seen = HashSet::with_capacity(scores.len());
    for score in scores {
        if !seen.insert(score.sub_criterion_id) {
            return Err(format!(
                "Sub-criterion {} is scored more than once",
                score.sub_criterion_id
            ));
        }
        if !expected.contains(&score.sub_criterion_id) {
            return Err(format!(
                "Sub-criterion {} does not belong to the employee's division",
                score.sub_criterion_id
            ));
        }
        validate_score_value(score.value).map_err(|msg| msg.to_string())?;
    }

    let missing = expected.difference(&seen).count();
    if missing > 0 {
        return Err(format!("{missing} sub-criteria have not been scored"));
    }

    Ok(())
}

pub async fn create_appraisal(
    service: &AppraisalService,
    appraisal: CreateAppraisalRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let period = match Period::new(appraisal.month, appraisal.year) {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::AppraisalInvalid, e.message())));
        }
    };

    let storage = service.get_storage(request);

    let employee = match storage.get_employee_by_id(appraisal.employee_id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EmployeeNotFound,
                "Employee not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve employee: {e}"),
                )),
            );
        }
    };

    if !employee.active {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EmployeeInactive,
            "Inactive employees cannot be appraised",
        )));
    }

    let catalog = match storage.list_criteria_by_division(employee.division).await {
        Ok(catalog) => catalog,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve criteria: {e}"),
                )),
            );
        }
    };

    if let Err(msg) = check_submission(&catalog, &appraisal.scores) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AppraisalInvalid, msg)));
    }

    let new_appraisal = NewAppraisal {
        employee_id: employee.id,
        period,
        created_by: user.subject,
        scores: appraisal.scores,
    };

    match storage.create_appraisal(new_appraisal).await {
        Ok((appraisal, entries)) => {
            info!(
                "Appraisal {} recorded for employee {} ({})",
                appraisal.id, employee.id, period
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AppraisalResponse { appraisal, entries },
                "Appraisal created successfully",
            )))
        }
        Err(KepswellError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AppraisalAlreadyExists, msg))),
        Err(e) => {
            error!("Appraisal creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Appraisal creation failed: {e}"),
                )),
            )
        }
    }
}
