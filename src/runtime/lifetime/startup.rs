use crate::config::AppConfig;
use crate::models::Division;
use crate::storage::{Storage, create_storage};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// Reports divisions that cannot be ranked yet
async fn check_criteria_catalogs(storage: &Arc<dyn Storage>) {
    for division in Division::ALL {
        match storage.list_criteria_by_division(division).await {
            Ok(criteria) if criteria.is_empty() => {
                warn!("Division {} has no criteria configured; ranking will be rejected", division);
            }
            Ok(criteria) => {
                let total_weight: f64 = criteria.iter().map(|c| c.weight).sum();
                info!(
                    "Division {}: {} criteria, total weight {}",
                    division,
                    criteria.len(),
                    total_weight
                );
            }
            Err(e) => warn!("Failed to read criteria of {}: {}", division, e),
        }
    }
}

/// Connects storage (running migrations) before the server starts
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();
    info!(
        "Preparing {} ({} environment)",
        config.app.system_name, config.app.environment
    );

    let storage = match create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("{}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    info!(
        "Missing-criterion policy: {:?}",
        config.ranking.missing_criterion_policy
    );
    check_criteria_catalogs(&storage).await;

    StartupContext { storage }
}
