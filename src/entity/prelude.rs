//! Convenience re-exports

pub use super::appraisals::{
    ActiveModel as AppraisalActiveModel, Entity as Appraisals, Model as AppraisalModel,
};
pub use super::criteria::{
    ActiveModel as CriterionActiveModel, Entity as Criteria, Model as CriterionModel,
};
pub use super::employees::{
    ActiveModel as EmployeeActiveModel, Entity as Employees, Model as EmployeeModel,
};
pub use super::score_entries::{
    ActiveModel as ScoreEntryActiveModel, Entity as ScoreEntries, Model as ScoreEntryModel,
};
pub use super::sub_criteria::{
    ActiveModel as SubCriterionActiveModel, Entity as SubCriteria, Model as SubCriterionModel,
};
