use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AppraisalService;
use crate::models::{
    ApiResponse, ErrorCode, Period,
    appraisals::{requests::AppraisalExistsParams, responses::AppraisalExistsResponse},
};

pub async fn appraisal_exists(
    service: &AppraisalService,
    query: AppraisalExistsParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let period = match Period::new(query.month, query.year) {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, e.message())));
        }
    };

    let storage = service.get_storage(request);

    match storage.appraisal_exists(query.employee_id, period).await {
        Ok(exists) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AppraisalExistsResponse { exists },
            "Appraisal lookup completed",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to look up appraisal: {e}"),
            )),
        ),
    }
}
