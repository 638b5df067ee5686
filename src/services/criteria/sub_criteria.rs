use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CriteriaService;
use crate::models::{
    ApiResponse, ErrorCode,
    criteria::{requests::CreateSubCriterionRequest, responses::SubCriterionResponse},
};
use crate::utils::validate::validate_name;

pub async fn create_sub_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    mut sub_criterion: CreateSubCriterionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&sub_criterion.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CriterionInvalid, msg)));
    }
    sub_criterion.name = sub_criterion.name.trim().to_string();

    let storage = service.get_storage(request);

    match storage
        .create_sub_criterion(criterion_id, sub_criterion)
        .await
    {
        Ok(Some(sub_criterion)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubCriterionResponse { sub_criterion },
            "Sub-criterion created successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "Criterion not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Sub-criterion creation failed: {e}"),
            )),
        ),
    }
}

pub async fn delete_sub_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    sub_criterion_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .delete_sub_criterion(criterion_id, sub_criterion_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Sub-criterion deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubCriterionNotFound,
            "Sub-criterion not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Sub-criterion deletion failed: {e}"),
            )),
        ),
    }
}
