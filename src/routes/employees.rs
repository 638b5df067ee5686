use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::UserRole;
use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::services::EmployeeService;
use crate::utils::SafeIDI64;

static EMPLOYEE_SERVICE: Lazy<EmployeeService> = Lazy::new(EmployeeService::new_lazy);

pub async fn list_employees(
    req: HttpRequest,
    query: web::Query<EmployeeListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .list_employees(query.into_inner(), &req)
        .await
}

pub async fn create_employee(
    req: HttpRequest,
    employee: web::Json<CreateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .create_employee(employee.into_inner(), &req)
        .await
}

pub async fn get_employee(req: HttpRequest, employee_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.get_employee(employee_id.0, &req).await
}

pub async fn update_employee(
    req: HttpRequest,
    employee_id: SafeIDI64,
    update: web::Json<UpdateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .update_employee(employee_id.0, update.into_inner(), &req)
        .await
}

pub fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::personnel_roles()))
                    .route("", web::get().to(list_employees))
                    .route("", web::post().to(create_employee))
                    .route("/{id}", web::get().to(get_employee))
                    .route("/{id}", web::put().to(update_employee)),
            ),
    );
}
