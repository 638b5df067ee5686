use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CriteriaService;
use crate::models::{ApiResponse, ErrorCode};

/// Hard delete. Score entries recorded against its sub-criteria stay in place
/// and are no longer counted by the ranking.
pub async fn delete_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_criterion(criterion_id).await {
        Ok(true) => {
            info!("Criterion {} deleted", criterion_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Criterion deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "Criterion not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criterion deletion failed: {e}"),
            )),
        ),
    }
}
