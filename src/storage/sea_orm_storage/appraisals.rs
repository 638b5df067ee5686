use std::collections::BTreeMap;

use super::{SeaOrmStorage, map_write_error};
use crate::entity::appraisals::{ActiveModel, Column, Entity as Appraisals, Relation};
use crate::entity::employees::{Column as EmployeeColumn, Entity as Employees};
use crate::entity::score_entries::{
    ActiveModel as ScoreEntryActiveModel, Column as ScoreEntryColumn, Entity as ScoreEntries,
};
use crate::errors::{KepswellError, Result};
use crate::models::{
    Division, Period,
    appraisals::entities::{Appraisal, ScoreEntry},
    employees::entities::Employee,
    rankings::entities::{RankedAppraisal, RankingInput, RankingScope},
};
use crate::storage::NewAppraisal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};

fn duplicate_message(employee_id: i64, period: Period) -> String {
    format!("Employee {employee_id} already has an appraisal for {period}")
}

impl SeaOrmStorage {
    /// Inserts the appraisal and all of its score entries in one transaction
    pub async fn create_appraisal_impl(
        &self,
        appraisal: NewAppraisal,
    ) -> Result<(Appraisal, Vec<ScoreEntry>)> {
        let conflict = duplicate_message(appraisal.employee_id, appraisal.period);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to begin transaction: {e}")))?;

        let existing = Appraisals::find()
            .filter(Column::EmployeeId.eq(appraisal.employee_id))
            .filter(Column::PeriodMonth.eq(appraisal.period.month))
            .filter(Column::PeriodYear.eq(appraisal.period.year))
            .count(&txn)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query appraisal: {e}")))?;
        if existing > 0 {
            return Err(KepswellError::conflict(conflict));
        }

        let header = ActiveModel {
            employee_id: Set(appraisal.employee_id),
            period_month: Set(appraisal.period.month),
            period_year: Set(appraisal.period.year),
            final_score: Set(None),
            created_by: Set(appraisal.created_by),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_write_error(e, "Failed to create appraisal", &conflict))?;

        let mut entries = Vec::with_capacity(appraisal.scores.len());
        for score in appraisal.scores {
            let entry = ScoreEntryActiveModel {
                appraisal_id: Set(header.id),
                sub_criterion_id: Set(score.sub_criterion_id),
                value: Set(score.value),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to create score entry: {e}"))
            })?;
            entries.push(entry.into_score_entry());
        }

        txn.commit()
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to commit appraisal: {e}")))?;

        Ok((header.into_appraisal(), entries))
    }

    pub async fn appraisal_exists_impl(&self, employee_id: i64, period: Period) -> Result<bool> {
        let count = Appraisals::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .filter(Column::PeriodMonth.eq(period.month))
            .filter(Column::PeriodYear.eq(period.year))
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query appraisal: {e}")))?;

        Ok(count > 0)
    }

    pub async fn get_appraisal_by_id_impl(
        &self,
        appraisal_id: i64,
    ) -> Result<Option<(Appraisal, Vec<ScoreEntry>)>> {
        let Some(appraisal) = Appraisals::find_by_id(appraisal_id)
            .one(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query appraisal: {e}")))?
        else {
            return Ok(None);
        };

        let entries = ScoreEntries::find()
            .filter(ScoreEntryColumn::AppraisalId.eq(appraisal_id))
            .order_by_asc(ScoreEntryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to query score entries: {e}"))
            })?;

        Ok(Some((
            appraisal.into_appraisal(),
            entries.into_iter().map(|m| m.into_score_entry()).collect(),
        )))
    }

    /// Appraisals of a period joined with their employee
    pub async fn list_appraisals_impl(
        &self,
        division: Option<Division>,
        period: Period,
    ) -> Result<Vec<(Appraisal, Employee)>> {
        let mut select = Appraisals::find()
            .find_also_related(Employees)
            .filter(Column::PeriodMonth.eq(period.month))
            .filter(Column::PeriodYear.eq(period.year));

        if let Some(division) = division {
            select = select.filter(EmployeeColumn::Division.eq(division.as_str()));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to list appraisals: {e}")))?;

        let mut result = Vec::with_capacity(rows.len());
        for (appraisal, employee) in rows {
            // FK cascade keeps this from happening
            let Some(employee) = employee else { continue };
            result.push((appraisal.into_appraisal(), employee.into_employee()?));
        }
        Ok(result)
    }

    pub async fn count_appraisals_in_period_impl(&self, period: Period) -> Result<i64> {
        let count = Appraisals::find()
            .filter(Column::PeriodMonth.eq(period.month))
            .filter(Column::PeriodYear.eq(period.year))
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to count appraisals: {e}")))?;

        Ok(count as i64)
    }

    /// Appraisals of the scope with their score entries, ordered by appraisal id
    pub async fn load_ranking_inputs_impl(&self, scope: RankingScope) -> Result<Vec<RankingInput>> {
        let appraisal_ids: Vec<i64> = Appraisals::find()
            .select_only()
            .column(Column::Id)
            .join(JoinType::InnerJoin, Relation::Employee.def())
            .filter(EmployeeColumn::Division.eq(scope.division.as_str()))
            .filter(Column::PeriodMonth.eq(scope.period.month))
            .filter(Column::PeriodYear.eq(scope.period.year))
            .order_by_asc(Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to load appraisals in scope: {e}"))
            })?;

        if appraisal_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = ScoreEntries::find()
            .filter(ScoreEntryColumn::AppraisalId.is_in(appraisal_ids.clone()))
            .order_by_asc(ScoreEntryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to load score entries: {e}"))
            })?;

        let mut grouped: BTreeMap<i64, Vec<ScoreEntry>> =
            appraisal_ids.iter().map(|id| (*id, Vec::new())).collect();
        for entry in entries {
            if let Some(list) = grouped.get_mut(&entry.appraisal_id) {
                list.push(entry.into_score_entry());
            }
        }

        Ok(grouped
            .into_iter()
            .map(|(appraisal_id, entries)| RankingInput {
                appraisal_id,
                entries,
            })
            .collect())
    }

    /// All-or-nothing write of final scores
    pub async fn save_final_scores_impl(&self, scores: &[RankedAppraisal]) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to begin transaction: {e}")))?;

        for score in scores {
            ActiveModel {
                id: Set(score.appraisal_id),
                final_score: Set(Some(score.final_score)),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!(
                    "Failed to save final score of appraisal {}: {e}",
                    score.appraisal_id
                ))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to commit final scores: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::KepswellError;
    use crate::models::appraisals::requests::ScoreInput;
    use crate::models::employees::requests::CreateEmployeeRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::testing::memory_storage;

    use super::*;

    async fn seed_employee(storage: &SeaOrmStorage, number: &str, division: Division) -> Employee {
        storage
            .create_employee(CreateEmployeeRequest {
                personnel_number: number.to_string(),
                name: format!("Employee {number}"),
                division,
                active: true,
            })
            .await
            .unwrap()
    }

    fn new_appraisal(employee_id: i64, period: Period, values: &[(i64, f64)]) -> NewAppraisal {
        NewAppraisal {
            employee_id,
            period,
            created_by: "hrd-1".to_string(),
            scores: values
                .iter()
                .map(|(sub_criterion_id, value)| ScoreInput {
                    sub_criterion_id: *sub_criterion_id,
                    value: *value,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_period_leaves_store_unchanged() {
        let storage = memory_storage().await;
        let employee = seed_employee(&storage, "K-100", Division::Marketing).await;
        let period = Period::new(4, 2025).unwrap();

        let (first, entries) = storage
            .create_appraisal(new_appraisal(employee.id, period, &[(1, 4.0), (2, 5.0)]))
            .await
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(first.final_score.is_none());

        let err = storage
            .create_appraisal(new_appraisal(employee.id, period, &[(1, 1.0)]))
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::Conflict(_)));

        assert_eq!(storage.count_appraisals_in_period(period).await.unwrap(), 1);
        let (_, stored) = storage.get_appraisal_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(storage.appraisal_exists(employee.id, period).await.unwrap());
        assert!(
            !storage
                .appraisal_exists(employee.id, Period::new(5, 2025).unwrap())
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_ranking_inputs_follow_scope() {
        let storage = memory_storage().await;
        let marketing = seed_employee(&storage, "K-200", Division::Marketing).await;
        let production = seed_employee(&storage, "K-201", Division::Produksi).await;
        let may = Period::new(4, 2025).unwrap();
        let june = Period::new(5, 2025).unwrap();

        let (in_scope, _) = storage
            .create_appraisal(new_appraisal(marketing.id, may, &[(1, 3.0)]))
            .await
            .unwrap();
        storage
            .create_appraisal(new_appraisal(marketing.id, june, &[(1, 5.0)]))
            .await
            .unwrap();
        storage
            .create_appraisal(new_appraisal(production.id, may, &[(9, 2.0)]))
            .await
            .unwrap();

        let inputs = storage
            .load_ranking_inputs(RankingScope {
                division: Division::Marketing,
                period: may,
            })
            .await
            .unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].appraisal_id, in_scope.id);
        assert_eq!(inputs[0].entries[0].value, 3.0);

        let listed = storage.list_appraisals(None, may).await.unwrap();
        assert_eq!(listed.len(), 2);
        let listed = storage
            .list_appraisals(Some(Division::Produksi), may)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].1.id, production.id);
    }

    #[tokio::test]
    async fn test_save_final_scores_is_atomic() {
        let storage = memory_storage().await;
        let employee = seed_employee(&storage, "K-300", Division::Admin).await;
        let period = Period::new(0, 2026).unwrap();
        let (appraisal, _) = storage
            .create_appraisal(new_appraisal(employee.id, period, &[(1, 4.0)]))
            .await
            .unwrap();

        let result = storage
            .save_final_scores(&[
                RankedAppraisal {
                    appraisal_id: appraisal.id,
                    final_score: 75.0,
                },
                RankedAppraisal {
                    appraisal_id: 9999,
                    final_score: 10.0,
                },
            ])
            .await;
        assert!(result.is_err());
        let (unchanged, _) = storage.get_appraisal_by_id(appraisal.id).await.unwrap().unwrap();
        assert_eq!(unchanged.final_score, None);

        storage
            .save_final_scores(&[RankedAppraisal {
                appraisal_id: appraisal.id,
                final_score: 75.0,
            }])
            .await
            .unwrap();
        let (saved, _) = storage.get_appraisal_by_id(appraisal.id).await.unwrap().unwrap();
        assert_eq!(saved.final_score, Some(75.0));
    }

    #[tokio::test]
    async fn test_employee_with_appraisals_keeps_division() {
        let storage = memory_storage().await;
        let employee = seed_employee(&storage, "K-400", Division::HostLive).await;
        storage
            .create_appraisal(new_appraisal(employee.id, Period::new(2, 2025).unwrap(), &[(1, 2.0)]))
            .await
            .unwrap();

        let err = storage
            .update_employee(
                employee.id,
                crate::models::employees::requests::UpdateEmployeeRequest {
                    name: None,
                    division: Some(Division::Admin),
                    active: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::Conflict(_)));
    }
}
