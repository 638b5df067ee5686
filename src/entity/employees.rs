//! Employee entity

use sea_orm::entity::prelude::*;

use crate::errors::KepswellError;
use crate::models::{Division, employees::entities::Employee};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub division: String,
    #[sea_orm(unique)]
    pub personnel_number: String,
    pub name: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appraisals::Entity")]
    Appraisals,
}

impl Related<super::appraisals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appraisals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_employee(self) -> crate::errors::Result<Employee> {
        let division = self.division.parse::<Division>().map_err(|e| {
            KepswellError::database_operation(format!("Employee {}: {e}", self.id))
        })?;

        Ok(Employee {
            id: self.id,
            division,
            personnel_number: self.personnel_number,
            name: self.name,
            active: self.active,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        })
    }
}
