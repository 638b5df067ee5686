use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::criteria::requests::{
    CreateCriterionRequest, CreateSubCriterionRequest, CriteriaQuery, UpdateCriterionRequest,
};
use crate::services::CriteriaService;
use crate::utils::{SafeIDI64, SafeSubIDI64};

static CRITERIA_SERVICE: Lazy<CriteriaService> = Lazy::new(CriteriaService::new_lazy);

pub async fn list_criteria(
    req: HttpRequest,
    query: web::Query<CriteriaQuery>,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE
        .list_criteria(query.into_inner().division, &req)
        .await
}

pub async fn create_criterion(
    req: HttpRequest,
    criterion: web::Json<CreateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE
        .create_criterion(criterion.into_inner(), &req)
        .await
}

pub async fn get_criterion(
    req: HttpRequest,
    criterion_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE.get_criterion(criterion_id.0, &req).await
}

pub async fn update_criterion(
    req: HttpRequest,
    criterion_id: SafeIDI64,
    update: web::Json<UpdateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE
        .update_criterion(criterion_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_criterion(
    req: HttpRequest,
    criterion_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE.delete_criterion(criterion_id.0, &req).await
}

pub async fn create_sub_criterion(
    req: HttpRequest,
    criterion_id: SafeIDI64,
    sub_criterion: web::Json<CreateSubCriterionRequest>,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE
        .create_sub_criterion(criterion_id.0, sub_criterion.into_inner(), &req)
        .await
}

pub async fn delete_sub_criterion(
    req: HttpRequest,
    criterion_id: SafeIDI64,
    sub_criterion_id: SafeSubIDI64,
) -> ActixResult<HttpResponse> {
    CRITERIA_SERVICE
        .delete_sub_criterion(criterion_id.0, sub_criterion_id.0, &req)
        .await
}

pub fn configure_criteria_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/criteria")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // any authenticated user may read the catalog
                    .route(web::get().to(list_criteria))
                    .route(
                        web::post()
                            .to(create_criterion)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_criterion))
                    .route(
                        web::put()
                            .to(update_criterion)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_criterion)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/sub-criteria")
                    .route(web::post().to(create_sub_criterion))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{id}/sub-criteria/{sub_id}")
                    .route(web::delete().to(delete_sub_criterion))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
