pub mod appraisals;

pub mod criteria;

pub mod dashboard;

pub mod employees;

pub mod rankings;

pub use appraisals::configure_appraisal_routes;
pub use criteria::configure_criteria_routes;
pub use dashboard::configure_dashboard_routes;
pub use employees::configure_employee_routes;
pub use rankings::configure_ranking_routes;

use actix_web::web;

/// Registers every API scope
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    configure_criteria_routes(cfg);
    configure_employee_routes(cfg);
    configure_appraisal_routes(cfg);
    configure_ranking_routes(cfg);
    configure_dashboard_routes(cfg);
}

/// Fallback for paths no scope matches
pub async fn not_found() -> actix_web::HttpResponse {
    crate::middlewares::create_error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        crate::models::ErrorCode::NotFound,
        "Resource not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use std::sync::Arc;

    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::testing::memory_storage;
    use crate::utils::jwt::JwtUtils;

    fn bearer(role: &str) -> (&'static str, String) {
        let token = JwtUtils::generate_access_token("tester", role).unwrap();
        ("Authorization", format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn test_compute_requires_manager_role() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_api_routes)
                .default_service(web::route().to(not_found)),
        )
        .await;
        let body = serde_json::json!({"division": "MARKETING", "month": 0, "year": 2026});

        let req = test::TestRequest::post()
            .uri("/api/v1/rankings/compute")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/v1/rankings/compute")
            .insert_header(bearer("hrd"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // Empty catalog
        let req = test::TestRequest::post()
            .uri("/api/v1/rankings/compute")
            .insert_header(bearer("manager"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_criterion_detail_is_readable_by_any_role() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_api_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/criteria")
            .insert_header(bearer("admin"))
            .set_json(serde_json::json!({
                "division": "HOST_LIVE",
                "name": "Viewer retention",
                "weight": 60.0,
                "direction": "BENEFIT"
            }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["criterion"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/criteria/{id}"))
            .insert_header(bearer("hrd"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["criterion"]["name"], "Viewer retention");

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/criteria/{id}"))
            .insert_header(bearer("hrd"))
            .set_json(serde_json::json!({"name": "Renamed"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/v1/criteria/9999")
            .insert_header(bearer("manager"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
