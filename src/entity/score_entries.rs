//! Score entry entity
//!
//! `sub_criterion_id` has no foreign key: entries survive the deletion of
//! their criterion.

use sea_orm::entity::prelude::*;

use crate::models::appraisals::entities::ScoreEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "score_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub appraisal_id: i64,
    pub sub_criterion_id: i64,
    #[sea_orm(column_type = "Double")]
    pub value: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appraisals::Entity",
        from = "Column::AppraisalId",
        to = "super::appraisals::Column::Id"
    )]
    Appraisal,
}

impl Related<super::appraisals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appraisal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_score_entry(self) -> ScoreEntry {
        ScoreEntry {
            id: self.id,
            appraisal_id: self.appraisal_id,
            sub_criterion_id: self.sub_criterion_id,
            value: self.value,
        }
    }
}
