//! Appraisal entity

use sea_orm::entity::prelude::*;

use crate::models::{Period, appraisals::entities::Appraisal};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appraisals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_id: i64,
    pub period_month: i32,
    pub period_year: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub final_score: Option<f64>,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id"
    )]
    Employee,
    #[sea_orm(has_many = "super::score_entries::Entity")]
    ScoreEntries,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::score_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoreEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_appraisal(self) -> Appraisal {
        Appraisal {
            id: self.id,
            employee_id: self.employee_id,
            period: Period {
                month: self.period_month,
                year: self.period_year,
            },
            final_score: self.final_score,
            created_by: self.created_by,
            created_at: super::from_timestamp(self.created_at),
        }
    }
}
