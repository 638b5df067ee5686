//! SMART ranking: pure scoring (`smart`), per-scope locking (`lock`) and the
//! run that ties them to storage (`engine`).

pub mod compute;
pub mod engine;
pub mod lock;
pub mod smart;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rankings::requests::ComputeRankingRequest;
use crate::storage::Storage;
use lock::ScopeLocks;

pub struct RankingService {
    storage: Option<Arc<dyn Storage>>,
    locks: ScopeLocks,
}

impl RankingService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            locks: ScopeLocks::new(),
        }
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

    pub(crate) fn locks(&self) -> &ScopeLocks {
        &self.locks
    }

    // Recompute final scores of one division and period
    pub async fn compute_ranking(
        &self,
        ranking: ComputeRankingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        compute::compute_ranking(self, ranking, request).await
    }
}
