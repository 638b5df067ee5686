//! Ranking run over one scope: lock, load, score, persist.

use std::time::Instant;

use tracing::{error, info, warn};

use super::lock::ScopeLocks;
use super::smart::{self, CriteriaCatalog};
use crate::config::MissingCriterionPolicy;
use crate::errors::{KepswellError, Result};
use crate::models::rankings::entities::RankingScope;
use crate::storage::Storage;

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOutcome {
    pub scope: RankingScope,
    pub criteria: usize,
    pub employees_ranked: usize,
}

/// Recomputes and stores the final score of every appraisal in `scope`.
///
/// Preconditions are checked before anything is written; the scores of one
/// run are saved in a single transaction.
pub async fn compute_ranking(
    storage: &dyn Storage,
    locks: &ScopeLocks,
    scope: RankingScope,
    policy: MissingCriterionPolicy,
) -> Result<RankingOutcome> {
    let started = Instant::now();

    match run(storage, locks, scope, policy).await {
        Ok(outcome) => {
            info!(
                division = %scope.division,
                month = scope.period.month,
                year = scope.period.year,
                criteria = outcome.criteria,
                appraisals = outcome.employees_ranked,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Ranking computed"
            );
            Ok(outcome)
        }
        Err(e) if e.is_precondition_failure() => {
            warn!("Ranking for {} rejected: {}", scope, e.message());
            Err(e)
        }
        Err(e) => {
            error!("Ranking for {} failed: {}", scope, e);
            Err(e)
        }
    }
}

async fn run(
    storage: &dyn Storage,
    locks: &ScopeLocks,
    scope: RankingScope,
    policy: MissingCriterionPolicy,
) -> Result<RankingOutcome> {
    let _guard = locks.try_acquire(scope)?;

    let criteria = storage.list_criteria_by_division(scope.division).await?;
    let catalog = CriteriaCatalog::new(&criteria)?;

    let inputs = storage.load_ranking_inputs(scope).await?;
    if inputs.is_empty() {
        return Err(KepswellError::no_data(format!(
            "No appraisals found for {scope}"
        )));
    }

    let ranked = smart::rank(&catalog, &inputs, policy);
    storage.save_final_scores(&ranked).await?;

    Ok(RankingOutcome {
        scope,
        criteria: catalog.len(),
        employees_ranked: ranked.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appraisals::requests::ScoreInput;
    use crate::models::criteria::entities::CriterionDirection;
    use crate::models::criteria::requests::{CreateCriterionRequest, CreateSubCriterionRequest};
    use crate::models::employees::requests::CreateEmployeeRequest;
    use crate::models::{Division, Period};
    use crate::storage::NewAppraisal;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::sea_orm_storage::testing::memory_storage;

    fn host_live_january() -> RankingScope {
        RankingScope {
            division: Division::HostLive,
            period: Period::new(0, 2026).unwrap(),
        }
    }

    async fn add_criterion(
        storage: &SeaOrmStorage,
        division: Division,
        weight: f64,
        direction: CriterionDirection,
    ) -> i64 {
        let criterion = storage
            .create_criterion(CreateCriterionRequest {
                division,
                name: format!("{direction} {weight}"),
                weight,
                direction,
            })
            .await
            .unwrap();
        storage
            .create_sub_criterion(criterion.id, CreateSubCriterionRequest { name: "Q1".into() })
            .await
            .unwrap()
            .unwrap()
            .id
    }

    async fn appraise(
        storage: &SeaOrmStorage,
        number: &str,
        division: Division,
        period: Period,
        scores: &[(i64, f64)],
    ) -> i64 {
        let employee = storage
            .create_employee(CreateEmployeeRequest {
                personnel_number: number.to_string(),
                name: number.to_string(),
                division,
                active: true,
            })
            .await
            .unwrap();
        let (appraisal, _) = storage
            .create_appraisal(NewAppraisal {
                employee_id: employee.id,
                period,
                created_by: "hrd".into(),
                scores: scores
                    .iter()
                    .map(|(sub_criterion_id, value)| ScoreInput {
                        sub_criterion_id: *sub_criterion_id,
                        value: *value,
                    })
                    .collect(),
            })
            .await
            .unwrap();
        appraisal.id
    }

    async fn final_score(storage: &SeaOrmStorage, appraisal_id: i64) -> Option<f64> {
        storage
            .get_appraisal_by_id(appraisal_id)
            .await
            .unwrap()
            .unwrap()
            .0
            .final_score
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("final score should be set");
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    /// Two HOST_LIVE employees in January 2026: C1 benefit 60, C2 cost 40
    async fn seeded() -> (SeaOrmStorage, i64, i64) {
        let storage = memory_storage().await;
        let scope = host_live_january();
        let c1 = add_criterion(&storage, Division::HostLive, 60.0, CriterionDirection::Benefit).await;
        let c2 = add_criterion(&storage, Division::HostLive, 40.0, CriterionDirection::Cost).await;
        let a = appraise(&storage, "A", scope.division, scope.period, &[(c1, 5.0), (c2, 1.0)]).await;
        let b = appraise(&storage, "B", scope.division, scope.period, &[(c1, 3.0), (c2, 5.0)]).await;
        (storage, a, b)
    }

    #[tokio::test]
    async fn test_compute_persists_final_scores() {
        let (storage, a, b) = seeded().await;
        let locks = ScopeLocks::new();

        let outcome = compute_ranking(
            &storage,
            &locks,
            host_live_january(),
            MissingCriterionPolicy::Zero,
        )
        .await
        .unwrap();

        assert_eq!(outcome.employees_ranked, 2);
        assert_eq!(outcome.criteria, 2);
        assert_close(final_score(&storage, a).await, 100.0);
        assert_close(final_score(&storage, b).await, 0.0);
        assert!(!locks.is_locked(&host_live_january()));
    }

    #[tokio::test]
    async fn test_recompute_is_idempotent() {
        let (storage, a, b) = seeded().await;
        let locks = ScopeLocks::new();
        let scope = host_live_january();

        compute_ranking(&storage, &locks, scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap();
        let first = (final_score(&storage, a).await, final_score(&storage, b).await);
        compute_ranking(&storage, &locks, scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap();
        let second = (final_score(&storage, a).await, final_score(&storage, b).await);

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_not_configured_writes_nothing() {
        let storage = memory_storage().await;
        let scope = host_live_january();
        let appraisal = appraise(&storage, "X", scope.division, scope.period, &[(1, 3.0)]).await;

        let err = compute_ranking(&storage, &ScopeLocks::new(), scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::NotConfigured(_)));
        assert_eq!(final_score(&storage, appraisal).await, None);
    }

    #[tokio::test]
    async fn test_empty_period_is_no_data() {
        let (storage, a, _) = seeded().await;
        let scope = RankingScope {
            division: Division::HostLive,
            period: Period::new(1, 2026).unwrap(),
        };

        let err = compute_ranking(&storage, &ScopeLocks::new(), scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::NoData(_)));
        assert_eq!(final_score(&storage, a).await, None);
    }

    #[tokio::test]
    async fn test_other_scopes_are_untouched() {
        let (storage, a, _) = seeded().await;
        let scope = host_live_january();
        let sub = add_criterion(&storage, Division::Marketing, 10.0, CriterionDirection::Benefit).await;
        let marketing = appraise(&storage, "M", Division::Marketing, scope.period, &[(sub, 4.0)]).await;
        let february = appraise(
            &storage,
            "F",
            Division::HostLive,
            Period::new(1, 2026).unwrap(),
            &[],
        )
        .await;

        compute_ranking(&storage, &ScopeLocks::new(), scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap();

        assert!(final_score(&storage, a).await.is_some());
        assert_eq!(final_score(&storage, marketing).await, None);
        assert_eq!(final_score(&storage, february).await, None);
    }

    #[tokio::test]
    async fn test_concurrent_run_on_same_scope_is_rejected() {
        let (storage, a, _) = seeded().await;
        let locks = ScopeLocks::new();
        let scope = host_live_january();

        let held = locks.try_acquire(scope).unwrap();
        let err = compute_ranking(&storage, &locks, scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::RankingInProgress(_)));
        assert_eq!(final_score(&storage, a).await, None);

        drop(held);
        compute_ranking(&storage, &locks, scope, MissingCriterionPolicy::Zero)
            .await
            .unwrap();
        assert_close(final_score(&storage, a).await, 100.0);
    }
}
