use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CriteriaService;
use crate::models::{
    ApiResponse, ErrorCode,
    criteria::{requests::UpdateCriterionRequest, responses::CriterionResponse},
};
use crate::utils::validate::{validate_name, validate_weight};

pub async fn update_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    mut update: UpdateCriterionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update.name.take() {
        if let Err(msg) = validate_name(&name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CriterionInvalid, msg)));
        }
        update.name = Some(name.trim().to_string());
    }

    if let Some(weight) = update.weight
        && let Err(msg) = validate_weight(weight)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CriterionInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_criterion(criterion_id, update).await {
        Ok(Some(criterion)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CriterionResponse { criterion },
            "Criterion updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "Criterion not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criterion update failed: {e}"),
            )),
        ),
    }
}
