use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CriteriaService;
use crate::models::{ApiResponse, ErrorCode, criteria::responses::CriterionResponse};

pub async fn get_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_criterion_by_id(criterion_id).await {
        Ok(Some(criterion)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CriterionResponse { criterion },
            "Criterion retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "Criterion not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve criterion: {e}"),
            )),
        ),
    }
}
