use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CriteriaService;
use crate::models::{
    ApiResponse, ErrorCode,
    criteria::{requests::CreateCriterionRequest, responses::CriterionResponse},
};
use crate::utils::validate::{validate_name, validate_weight};

pub async fn create_criterion(
    service: &CriteriaService,
    mut criterion: CreateCriterionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&criterion.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CriterionInvalid, msg)));
    }

    if let Err(msg) = validate_weight(criterion.weight) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CriterionInvalid, msg)));
    }

    criterion.name = criterion.name.trim().to_string();
    let storage = service.get_storage(request);

    match storage.create_criterion(criterion).await {
        Ok(criterion) => {
            info!(
                "Criterion {} ({}) created for {}",
                criterion.id, criterion.name, criterion.division
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CriterionResponse { criterion },
                "Criterion created successfully",
            )))
        }
        Err(e) => {
            error!("Criterion creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Criterion creation failed: {e}"),
                )),
            )
        }
    }
}
