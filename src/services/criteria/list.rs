use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CriteriaService;
use crate::models::{
    ApiResponse, Division, ErrorCode, criteria::responses::CriteriaListResponse,
};

pub async fn list_criteria(
    service: &CriteriaService,
    division: Division,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_criteria_by_division(division).await {
        Ok(items) => {
            let total_weight: f64 = items.iter().map(|c| c.weight).sum();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CriteriaListResponse {
                    division,
                    total_weight,
                    items,
                },
                "Criteria retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve criteria: {e}"),
            )),
        ),
    }
}
