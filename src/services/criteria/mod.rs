pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod sub_criteria;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::Division;
use crate::models::criteria::requests::{
    CreateCriterionRequest, CreateSubCriterionRequest, UpdateCriterionRequest,
};
use crate::storage::Storage;

pub struct CriteriaService {
    storage: Option<Arc<dyn Storage>>,
}

impl CriteriaService {
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

    // Catalog of one division
    pub async fn list_criteria(
        &self,
        division: Division,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_criteria(self, division, request).await
    }

    pub async fn get_criterion(
        &self,
        criterion_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_criterion(self, criterion_id, request).await
    }

    pub async fn create_criterion(
        &self,
        criterion: CreateCriterionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_criterion(self, criterion, request).await
    }

    pub async fn update_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_criterion(self, criterion_id, update, request).await
    }

    pub async fn delete_criterion(
        &self,
        criterion_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_criterion(self, criterion_id, request).await
    }

    pub async fn create_sub_criterion(
        &self,
        criterion_id: i64,
        sub_criterion: CreateSubCriterionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sub_criteria::create_sub_criterion(self, criterion_id, sub_criterion, request).await
    }

    pub async fn delete_sub_criterion(
        &self,
        criterion_id: i64,
        sub_criterion_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sub_criteria::delete_sub_criterion(self, criterion_id, sub_criterion_id, request).await
    }
}
