pub mod create;
pub mod detail;
pub mod exists;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::appraisals::requests::{
    AppraisalExistsParams, AppraisalListParams, AppraisalStatusParams, CreateAppraisalRequest,
};
use crate::storage::Storage;

pub struct AppraisalService {
    storage: Option<Arc<dyn Storage>>,
}

impl AppraisalService {
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

    // Record a monthly appraisal
    pub async fn create_appraisal(
        &self,
        appraisal: CreateAppraisalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_appraisal(self, appraisal, request).await
    }

    // Ranking table of a period
    pub async fn list_appraisals(
        &self,
        query: AppraisalListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_appraisals(self, query, request).await
    }

    pub async fn get_appraisal(
        &self,
        appraisal_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_appraisal(self, appraisal_id, request).await
    }

    // Which employees still need an appraisal
    pub async fn appraisal_status(
        &self,
        query: AppraisalStatusParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::appraisal_status(self, query, request).await
    }

    pub async fn appraisal_exists(
        &self,
        query: AppraisalExistsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        exists::appraisal_exists(self, query, request).await
    }
}
