use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::appraisals::requests::{
    AppraisalExistsParams, AppraisalListParams, AppraisalStatusParams, CreateAppraisalRequest,
};
use crate::models::auth::entities::UserRole;
use crate::services::AppraisalService;
use crate::utils::SafeIDI64;

static APPRAISAL_SERVICE: Lazy<AppraisalService> = Lazy::new(AppraisalService::new_lazy);

pub async fn create_appraisal(
    req: HttpRequest,
    appraisal: web::Json<CreateAppraisalRequest>,
) -> ActixResult<HttpResponse> {
    APPRAISAL_SERVICE
        .create_appraisal(appraisal.into_inner(), &req)
        .await
}

pub async fn list_appraisals(
    req: HttpRequest,
    query: web::Query<AppraisalListParams>,
) -> ActixResult<HttpResponse> {
    APPRAISAL_SERVICE
        .list_appraisals(query.into_inner(), &req)
        .await
}

pub async fn get_appraisal(req: HttpRequest, appraisal_id: SafeIDI64) -> ActixResult<HttpResponse> {
    APPRAISAL_SERVICE.get_appraisal(appraisal_id.0, &req).await
}

pub async fn appraisal_status(
    req: HttpRequest,
    query: web::Query<AppraisalStatusParams>,
) -> ActixResult<HttpResponse> {
    APPRAISAL_SERVICE
        .appraisal_status(query.into_inner(), &req)
        .await
}

pub async fn appraisal_exists(
    req: HttpRequest,
    query: web::Query<AppraisalExistsParams>,
) -> ActixResult<HttpResponse> {
    APPRAISAL_SERVICE
        .appraisal_exists(query.into_inner(), &req)
        .await
}

pub fn configure_appraisal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/appraisals")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // ranking table is visible to every role
                    .route(web::get().to(list_appraisals))
                    .route(
                        web::post()
                            .to(create_appraisal)
                            .wrap(middlewares::RequireRole::new_any(UserRole::hrd_roles())),
                    ),
            )
            .service(
                web::resource("/status")
                    .route(web::get().to(appraisal_status))
                    .wrap(middlewares::RequireRole::new_any(UserRole::hrd_roles())),
            )
            .service(
                web::resource("/exists")
                    .route(web::get().to(appraisal_exists))
                    .wrap(middlewares::RequireRole::new_any(UserRole::hrd_roles())),
            )
            .service(web::resource("/{id}").route(web::get().to(get_appraisal))),
    );
}
