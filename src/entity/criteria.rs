//! Criterion entity

use sea_orm::entity::prelude::*;

use crate::errors::KepswellError;
use crate::models::Division;
use crate::models::criteria::entities::{Criterion, CriterionDirection, SubCriterion};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub division: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
    pub direction: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_criteria::Entity")]
    SubCriteria,
}

impl Related<super::sub_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCriteria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_criterion(
        self,
        sub_criteria: Vec<SubCriterion>,
    ) -> crate::errors::Result<Criterion> {
        let division = self.division.parse::<Division>().map_err(|e| {
            KepswellError::database_operation(format!("Criterion {}: {e}", self.id))
        })?;
        let direction = self.direction.parse::<CriterionDirection>().map_err(|e| {
            KepswellError::database_operation(format!("Criterion {}: {e}", self.id))
        })?;

        Ok(Criterion {
            id: self.id,
            division,
            name: self.name,
            weight: self.weight,
            direction,
            sub_criteria,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(division: &str) -> Model {
        Model {
            id: 7,
            division: division.into(),
            name: "Sales volume".into(),
            weight: 60.0,
            direction: "BENEFIT".into(),
            created_at: 1_767_225_600,
            updated_at: 1_767_225_600,
        }
    }

    #[test]
    fn test_active_model_round_trip() {
        let active: ActiveModel = model("HOST_LIVE").into();
        assert_eq!(Model::try_from(active).unwrap(), model("HOST_LIVE"));
    }

    #[test]
    fn test_into_criterion() {
        let criterion = model("HOST_LIVE").into_criterion(Vec::new()).unwrap();
        assert_eq!(criterion.division, Division::HostLive);
        assert_eq!(criterion.direction, CriterionDirection::Benefit);

        let err = model("FINANCE").into_criterion(Vec::new()).unwrap_err();
        assert!(matches!(err, KepswellError::DatabaseOperation(_)));
    }
}
