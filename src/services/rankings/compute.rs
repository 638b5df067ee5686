use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{RankingService, engine};
use crate::config::AppConfig;
use crate::errors::KepswellError;
use crate::models::{
    ApiResponse, ErrorCode, Period,
    rankings::{
        entities::RankingScope, requests::ComputeRankingRequest,
        responses::ComputeRankingResponse,
    },
};

pub async fn compute_ranking(
    service: &RankingService,
    ranking: ComputeRankingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let period = match Period::new(ranking.month, ranking.year) {
        Ok(period) => period,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, e.message())));
        }
    };

    let scope = RankingScope {
        division: ranking.division,
        period,
    };
    let policy = AppConfig::get().ranking.missing_criterion_policy;
    let storage = service.get_storage(request);

    match engine::compute_ranking(storage.as_ref(), service.locks(), scope, policy).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ComputeRankingResponse {
                division: scope.division,
                period: scope.period,
                employees_ranked: outcome.employees_ranked as i64,
            },
            "Ranking computed successfully",
        ))),
        Err(KepswellError::NotConfigured(msg)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::RankingNotConfigured, msg))),
        Err(KepswellError::NoData(msg)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::RankingNoData, msg))),
        Err(KepswellError::RankingInProgress(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::RankingInProgress, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RankingFailed,
                format!("Ranking computation failed, no scores were changed: {e}"),
            )),
        ),
    }
}
