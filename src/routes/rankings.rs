use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::rankings::requests::ComputeRankingRequest;
use crate::services::RankingService;

// Holds the per-scope locks, so one instance per process
static RANKING_SERVICE: Lazy<RankingService> = Lazy::new(RankingService::new_lazy);

pub async fn compute_ranking(
    req: HttpRequest,
    ranking: web::Json<ComputeRankingRequest>,
) -> ActixResult<HttpResponse> {
    RANKING_SERVICE
        .compute_ranking(ranking.into_inner(), &req)
        .await
}

pub fn configure_ranking_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rankings")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::manager_roles()))
                    .route("/compute", web::post().to(compute_ranking)),
            ),
    );
}
