use super::SeaOrmStorage;
use crate::entity::criteria::{ActiveModel, Column, Entity as Criteria};
use crate::entity::sub_criteria::{
    ActiveModel as SubCriterionActiveModel, Column as SubCriterionColumn,
    Entity as SubCriteria, Model as SubCriterionModel,
};
use crate::errors::{KepswellError, Result};
use crate::models::{
    Division,
    criteria::{
        entities::{Criterion, SubCriterion},
        requests::{CreateCriterionRequest, CreateSubCriterionRequest, UpdateCriterionRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

fn into_sub_criteria(mut models: Vec<SubCriterionModel>) -> Vec<SubCriterion> {
    models.sort_by_key(|m| m.id);
    models.into_iter().map(|m| m.into_sub_criterion()).collect()
}

impl SeaOrmStorage {
    pub async fn list_criteria_by_division_impl(&self, division: Division) -> Result<Vec<Criterion>> {
        let rows = Criteria::find()
            .filter(Column::Division.eq(division.as_str()))
            .order_by_asc(Column::Id)
            .find_with_related(SubCriteria)
            .all(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to list criteria: {e}")))?;

        rows.into_iter()
            .map(|(criterion, subs)| criterion.into_criterion(into_sub_criteria(subs)))
            .collect()
    }

    pub async fn get_criterion_by_id_impl(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        let Some(criterion) = Criteria::find_by_id(criterion_id)
            .one(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query criterion: {e}")))?
        else {
            return Ok(None);
        };

        let subs = criterion
            .find_related(SubCriteria)
            .all(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to query sub-criteria: {e}"))
            })?;

        criterion.into_criterion(into_sub_criteria(subs)).map(Some)
    }

    pub async fn create_criterion_impl(&self, req: CreateCriterionRequest) -> Result<Criterion> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            division: Set(req.division.to_string()),
            name: Set(req.name),
            weight: Set(req.weight),
            direction: Set(req.direction.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to create criterion: {e}")))?;

        result.into_criterion(Vec::new())
    }

    pub async fn update_criterion_impl(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<Criterion>> {
        if self.get_criterion_by_id_impl(criterion_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(criterion_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(weight) = update.weight {
            model.weight = Set(weight);
        }

        if let Some(direction) = update.direction {
            model.direction = Set(direction.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to update criterion: {e}")))?;

        self.get_criterion_by_id_impl(criterion_id).await
    }

    pub async fn delete_criterion_impl(&self, criterion_id: i64) -> Result<bool> {
        let result = Criteria::delete_by_id(criterion_id)
            .exec(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to delete criterion: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_sub_criterion_impl(
        &self,
        criterion_id: i64,
        req: CreateSubCriterionRequest,
    ) -> Result<Option<SubCriterion>> {
        let exists = Criteria::find_by_id(criterion_id)
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to query criterion: {e}")))?;
        if exists == 0 {
            return Ok(None);
        }

        let model = SubCriterionActiveModel {
            criterion_id: Set(criterion_id),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            KepswellError::database_operation(format!("Failed to create sub-criterion: {e}"))
        })?;

        Ok(Some(result.into_sub_criterion()))
    }

    pub async fn delete_sub_criterion_impl(
        &self,
        criterion_id: i64,
        sub_criterion_id: i64,
    ) -> Result<bool> {
        let result = SubCriteria::delete_many()
            .filter(SubCriterionColumn::Id.eq(sub_criterion_id))
            .filter(SubCriterionColumn::CriterionId.eq(criterion_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                KepswellError::database_operation(format!("Failed to delete sub-criterion: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_criteria_impl(&self) -> Result<i64> {
        let count = Criteria::find()
            .count(&self.db)
            .await
            .map_err(|e| KepswellError::database_operation(format!("Failed to count criteria: {e}")))?;

        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::criteria::entities::CriterionDirection;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::testing::memory_storage;

    use super::*;

    fn criterion(division: Division, name: &str, weight: f64) -> CreateCriterionRequest {
        CreateCriterionRequest {
            division,
            name: name.to_string(),
            weight,
            direction: CriterionDirection::Benefit,
        }
    }

    #[tokio::test]
    async fn test_criteria_are_scoped_by_division() {
        let storage = memory_storage().await;
        let sales = storage
            .create_criterion(criterion(Division::Marketing, "Sales", 60.0))
            .await
            .unwrap();
        storage
            .create_criterion(criterion(Division::Produksi, "Output", 100.0))
            .await
            .unwrap();
        storage
            .create_sub_criterion(sales.id, CreateSubCriterionRequest { name: "Closing".into() })
            .await
            .unwrap()
            .unwrap();

        let marketing = storage
            .list_criteria_by_division(Division::Marketing)
            .await
            .unwrap();
        assert_eq!(marketing.len(), 1);
        assert_eq!(marketing[0].name, "Sales");
        assert_eq!(marketing[0].sub_criteria.len(), 1);
        assert_eq!(storage.count_criteria().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_criterion() {
        let storage = memory_storage().await;
        let created = storage
            .create_criterion(criterion(Division::Admin, "Accuracy", 40.0))
            .await
            .unwrap();

        let updated = storage
            .update_criterion(
                created.id,
                UpdateCriterionRequest {
                    name: None,
                    weight: Some(55.0),
                    direction: Some(CriterionDirection::Cost),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Accuracy");
        assert_eq!(updated.weight, 55.0);
        assert_eq!(updated.direction, CriterionDirection::Cost);

        let missing = storage
            .update_criterion(
                9999,
                UpdateCriterionRequest {
                    name: Some("x".into()),
                    weight: None,
                    direction: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());

        storage
            .create_sub_criterion(created.id, CreateSubCriterionRequest { name: "Typos".into() })
            .await
            .unwrap();
        assert!(storage.delete_criterion(created.id).await.unwrap());
        assert!(storage.get_criterion_by_id(created.id).await.unwrap().is_none());
        assert!(!storage.delete_criterion(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_sub_criterion_requires_parent() {
        let storage = memory_storage().await;
        let orphan = storage
            .create_sub_criterion(42, CreateSubCriterionRequest { name: "Nope".into() })
            .await
            .unwrap();
        assert!(orphan.is_none());

        let parent = storage
            .create_criterion(criterion(Division::HostLive, "Engagement", 50.0))
            .await
            .unwrap();
        let sub = storage
            .create_sub_criterion(parent.id, CreateSubCriterionRequest { name: "Viewers".into() })
            .await
            .unwrap()
            .unwrap();

        // wrong parent
        assert!(!storage.delete_sub_criterion(parent.id + 1, sub.id).await.unwrap());
        assert!(storage.delete_sub_criterion(parent.id, sub.id).await.unwrap());
    }
}
