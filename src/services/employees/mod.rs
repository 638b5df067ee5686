pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::storage::Storage;

pub struct EmployeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl EmployeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_employees(
        &self,
        query: EmployeeListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_employees(self, query, request).await
    }

    pub async fn create_employee(
        &self,
        employee: CreateEmployeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_employee(self, employee, request).await
    }

    pub async fn get_employee(
        &self,
        employee_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_employee(self, employee_id, request).await
    }

    pub async fn update_employee(
        &self,
        employee_id: i64,
        update: UpdateEmployeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_employee(self, employee_id, update, request).await
    }
}
