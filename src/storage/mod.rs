use std::sync::Arc;

use crate::models::{
    Division, Period,
    appraisals::{
        entities::{Appraisal, ScoreEntry},
        requests::ScoreInput,
    },
    criteria::{
        entities::{Criterion, SubCriterion},
        requests::{CreateCriterionRequest, CreateSubCriterionRequest, UpdateCriterionRequest},
    },
    employees::{
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
        responses::EmployeeListResponse,
    },
    rankings::entities::{RankedAppraisal, RankingInput, RankingScope},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// Appraisal ready to be persisted together with its score entries
#[derive(Debug, Clone)]
pub struct NewAppraisal {
    pub employee_id: i64,
    pub period: Period,
    pub created_by: String,
    pub scores: Vec<ScoreInput>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Criteria catalog
    // Criteria of a division with their sub-criteria, ordered by id
    async fn list_criteria_by_division(&self, division: Division) -> Result<Vec<Criterion>>;
    async fn get_criterion_by_id(&self, criterion_id: i64) -> Result<Option<Criterion>>;
    async fn create_criterion(&self, criterion: CreateCriterionRequest) -> Result<Criterion>;
    async fn update_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>>;
    // Hard delete, sub-criteria go with it
    async fn delete_criterion(&self, criterion_id: i64) -> Result<bool>;
    // None when the criterion does not exist
    async fn create_sub_criterion(
        &self,
        criterion_id: i64,
        sub_criterion: CreateSubCriterionRequest,
    ) -> Result<Option<SubCriterion>>;
    async fn delete_sub_criterion(&self, criterion_id: i64, sub_criterion_id: i64)
    -> Result<bool>;
    async fn count_criteria(&self) -> Result<i64>;

    /// Employees
    // Duplicate personnel number fails with Conflict
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee>;
    async fn get_employee_by_id(&self, employee_id: i64) -> Result<Option<Employee>>;
    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse>;
    // All employees, ordered by name
    async fn list_employees(&self, division: Option<Division>) -> Result<Vec<Employee>>;
    async fn update_employee(
        &self,
        employee_id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>>;
    async fn count_employees(&self) -> Result<i64>;
    async fn count_employees_by_division(&self) -> Result<Vec<(Division, i64)>>;

    /// Appraisals
    // Atomic; a second appraisal for the same employee and period fails with Conflict
    async fn create_appraisal(&self, appraisal: NewAppraisal)
    -> Result<(Appraisal, Vec<ScoreEntry>)>;
    async fn appraisal_exists(&self, employee_id: i64, period: Period) -> Result<bool>;
    async fn get_appraisal_by_id(
        &self,
        appraisal_id: i64,
    ) -> Result<Option<(Appraisal, Vec<ScoreEntry>)>>;
    async fn list_appraisals(
        &self,
        division: Option<Division>,
        period: Period,
    ) -> Result<Vec<(Appraisal, Employee)>>;
    async fn count_appraisals_in_period(&self, period: Period) -> Result<i64>;

    /// Ranking
    // Every appraisal in scope with its score entries
    async fn load_ranking_inputs(&self, scope: RankingScope) -> Result<Vec<RankingInput>>;
    // Writes all final scores in one transaction; nothing is written on failure
    async fn save_final_scores(&self, scores: &[RankedAppraisal]) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
