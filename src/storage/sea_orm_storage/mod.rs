//! SeaORM storage implementation
//!
//! One storage layer for SQLite, PostgreSQL and MySQL.

mod appraisals;
mod criteria;
mod employees;

use crate::config::AppConfig;
use crate::errors::{KepswellError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Storage from the application configuration
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// Connects, then runs pending migrations
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection (WAL + pragmas). An in-memory database lives in a
    /// single connection that is never recycled.
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| KepswellError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| {
                KepswellError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL / MySQL
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            KepswellError::database_connection(format!("Cannot connect to database: {e}"))
        })
    }

    /// Infers the backend from the URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(KepswellError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

/// Maps unique-index violations to `Conflict`, everything else to a
/// database operation error with context.
pub(crate) fn map_write_error(err: DbErr, context: &str, conflict_message: &str) -> KepswellError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => KepswellError::conflict(conflict_message),
        _ => KepswellError::database_operation(format!("{context}: {err}")),
    }
}

// Storage trait implementation
use crate::models::{
    Division, Period,
    appraisals::entities::{Appraisal, ScoreEntry},
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
use crate::storage::{NewAppraisal, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Criteria
    async fn list_criteria_by_division(&self, division: Division) -> Result<Vec<Criterion>> {
        self.list_criteria_by_division_impl(division).await
    }

    async fn get_criterion_by_id(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        self.get_criterion_by_id_impl(criterion_id).await
    }

    async fn create_criterion(&self, criterion: CreateCriterionRequest) -> Result<Criterion> {
        self.create_criterion_impl(criterion).await
    }

    async fn update_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>> {
        self.update_criterion_impl(criterion_id, update).await
    }

    async fn delete_criterion(&self, criterion_id: i64) -> Result<bool> {
        self.delete_criterion_impl(criterion_id).await
    }

    async fn create_sub_criterion(
        &self,
        criterion_id: i64,
        sub_criterion: CreateSubCriterionRequest,
    ) -> Result<Option<SubCriterion>> {
        self.create_sub_criterion_impl(criterion_id, sub_criterion)
            .await
    }

    async fn delete_sub_criterion(
        &self,
        criterion_id: i64,
        sub_criterion_id: i64,
    ) -> Result<bool> {
        self.delete_sub_criterion_impl(criterion_id, sub_criterion_id)
            .await
    }

    async fn count_criteria(&self) -> Result<i64> {
        self.count_criteria_impl().await
    }

    // Employees
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee> {
        self.create_employee_impl(employee).await
    }

    async fn get_employee_by_id(&self, employee_id: i64) -> Result<Option<Employee>> {
        self.get_employee_by_id_impl(employee_id).await
    }

    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        self.list_employees_with_pagination_impl(query).await
    }

    async fn list_employees(&self, division: Option<Division>) -> Result<Vec<Employee>> {
        self.list_employees_impl(division).await
    }

    async fn update_employee(
        &self,
        employee_id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        self.update_employee_impl(employee_id, update).await
    }

    async fn count_employees(&self) -> Result<i64> {
        self.count_employees_impl().await
    }

    async fn count_employees_by_division(&self) -> Result<Vec<(Division, i64)>> {
        self.count_employees_by_division_impl().await
    }

    // Appraisals
    async fn create_appraisal(
        &self,
        appraisal: NewAppraisal,
    ) -> Result<(Appraisal, Vec<ScoreEntry>)> {
        self.create_appraisal_impl(appraisal).await
    }

    async fn appraisal_exists(&self, employee_id: i64, period: Period) -> Result<bool> {
        self.appraisal_exists_impl(employee_id, period).await
    }

    async fn get_appraisal_by_id(
        &self,
        appraisal_id: i64,
    ) -> Result<Option<(Appraisal, Vec<ScoreEntry>)>> {
        self.get_appraisal_by_id_impl(appraisal_id).await
    }

    async fn list_appraisals(
        &self,
        division: Option<Division>,
        period: Period,
    ) -> Result<Vec<(Appraisal, Employee)>> {
        self.list_appraisals_impl(division, period).await
    }

    async fn count_appraisals_in_period(&self, period: Period) -> Result<i64> {
        self.count_appraisals_in_period_impl(period).await
    }

    // Ranking
    async fn load_ranking_inputs(&self, scope: RankingScope) -> Result<Vec<RankingInput>> {
        self.load_ranking_inputs_impl(scope).await
    }

    async fn save_final_scores(&self, scores: &[RankedAppraisal]) -> Result<()> {
        self.save_final_scores_impl(scores).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SeaOrmStorage;

    /// Fresh in-memory database with migrations applied
    pub async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::connect(":memory:", 1, 5)
            .await
            .expect("in-memory storage should start")
    }
}
