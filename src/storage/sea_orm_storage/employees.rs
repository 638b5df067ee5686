use super::{SeaOrmStorage, map_write_error};
use crate::entity::appraisals::{Column as AppraisalColumn, Entity as Appraisals};
use crate::entity::employees::{ActiveModel, Column, Entity as Employees};
use crate::errors::{KepswellError, Result};
use crate::models::{
    Division, PaginationInfo,
    employees::{
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
        responses::EmployeeListResponse,
    },
    normalize_page,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// Creates an employee; the personnel number must be unused
    pub async fn create_employee_impl(&self, req: CreateEmployeeRequest) -> Result<Employee> {
        let taken = Employees::find()
            .filter(Column::PersonnelNumber.eq(&req.personnel_number))
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query employee: {e}")))?;
        if taken > 0 {
            return Err(KepswellError::conflict(format!(
                "Personnel number {} is already registered",
                req.personnel_number
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let conflict = format!(
            "Personnel number {} is already registered",
            req.personnel_number
        );

        let model = ActiveModel {
            division: Set(req.division.to_string()),
            personnel_number: Set(req.personnel_number),
            name: Set(req.name),
            active: Set(req.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to create employee", &conflict))?;

        result.into_employee()
    }

    pub async fn get_employee_by_id_impl(&self, employee_id: i64) -> Result<Option<Employee>> {
        let result = Employees::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query employee: {e}")))?;

        result.map(|m| m.into_employee()).transpose()
    }

    /// Paged employee list
    pub async fn list_employees_with_pagination_impl(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Employees::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(term))
                    .add(Column::PersonnelNumber.contains(term)),
            );
        }

        if let Some(division) = query.division {
            select = select.filter(Column::Division.eq(division.as_str()));
        }

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        select = select.order_by_asc(Column::Name).order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            KepswellError::database_operation(format!("Failed to count employees: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            KepswellError::database_operation(format!("Failed to count employee pages: {e}"))
        })?;

        let employees = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to list employees: {e}")))?;

        Ok(EmployeeListResponse {
            items: employees
                .into_iter()
                .map(|m| m.into_employee())
                .collect::<Result<Vec<_>>>()?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_employees_impl(&self, division: Option<Division>) -> Result<Vec<Employee>> {
        let mut select = Employees::find();
        if let Some(division) = division {
            select = select.filter(Column::Division.eq(division.as_str()));
        }

        select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to list employees: {e}")))?
            .into_iter()
            .map(|m| m.into_employee())
            .collect()
    }

    /// Updates an employee. Moving an employee who already has appraisals
    /// to another division is refused.
    pub async fn update_employee_impl(
        &self,
        employee_id: i64,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        let Some(existing) = self.get_employee_by_id_impl(employee_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(employee_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(division) = update.division
            && division != existing.division
        {
            let appraised = Appraisals::find()
                .filter(AppraisalColumn::EmployeeId.eq(employee_id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    KepswellError::database_operation(format!("Failed to query appraisals: {e}"))
                })?;
            if appraised > 0 {
                return Err(KepswellError::conflict(
                    "Employee already has appraisals and cannot change division",
                ));
            }
            model.division = Set(division.to_string());
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to update employee: {e}")))?;

        self.get_employee_by_id_impl(employee_id).await
    }

    pub async fn count_employees_impl(&self) -> Result<i64> {
        let count = Employees::find()
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to count employees: {e}")))?;

        Ok(count as i64)
    }

    /// Headcount per division; divisions without employees are reported as 0
    pub async fn count_employees_by_division_impl(&self) -> Result<Vec<(Division, i64)>> {
        let rows: Vec<(String, i64)> = Employees::find()
            .select_only()
            .column(Column::Division)
            .column_as(Column::Id.count(), "employees")
            .group_by(Column::Division)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to count employees by division: {e}"))
            })?;

        Ok(Division::ALL
            .iter()
            .map(|division| {
                let count = rows
                    .iter()
                    .find(|(name, _)| name == division.as_str())
                    .map(|(_, count)| *count)
                    .unwrap_or(0);
                (*division, count)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::KepswellError;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::testing::memory_storage;

    use super::*;

    fn employee(number: &str, name: &str, division: Division) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            personnel_number: number.to_string(),
            name: name.to_string(),
            division,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_duplicate_personnel_number_conflicts() {
        let storage = memory_storage().await;
        storage
            .create_employee(employee("K-001", "Sari", Division::Marketing))
            .await
            .unwrap();

        let err = storage
            .create_employee(employee("K-001", "Budi", Division::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, KepswellError::Conflict(_)));
        assert_eq!(storage.count_employees().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let storage = memory_storage().await;
        for (number, name, division) in [
            ("K-001", "Sari", Division::Marketing),
            ("K-002", "Budi", Division::Marketing),
            ("K-003", "Ayu", Division::Produksi),
        ] {
            storage
                .create_employee(employee(number, name, division))
                .await
                .unwrap();
        }

        let marketing = storage
            .list_employees_with_pagination(EmployeeListQuery {
                division: Some(Division::Marketing),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(marketing.pagination.total, 2);
        assert_eq!(marketing.items[0].name, "Budi");

        let paged = storage
            .list_employees_with_pagination(EmployeeListQuery {
                page: Some(2),
                size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(paged.items.len(), 1);
        assert_eq!(paged.pagination.total_pages, 2);

        let searched = storage
            .list_employees_with_pagination(EmployeeListQuery {
                search: Some("K-003".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(searched.items.len(), 1);
        assert_eq!(searched.items[0].name, "Ayu");

        let counts = storage.count_employees_by_division().await.unwrap();
        assert!(counts.contains(&(Division::Marketing, 2)));
        assert!(counts.contains(&(Division::HostLive, 0)));
    }

    #[tokio::test]
    async fn test_update_employee() {
        let storage = memory_storage().await;
        let created = storage
            .create_employee(employee("K-010", "Dewi", Division::HostLive))
            .await
            .unwrap();

        let updated = storage
            .update_employee(
                created.id,
                UpdateEmployeeRequest {
                    name: Some("Dewi Lestari".into()),
                    division: Some(Division::Admin),
                    active: Some(false),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Dewi Lestari");
        assert_eq!(updated.division, Division::Admin);
        assert!(!updated.active);

        let missing = storage
            .update_employee(
                9999,
                UpdateEmployeeRequest {
                    name: None,
                    division: None,
                    active: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
