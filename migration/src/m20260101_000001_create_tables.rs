use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employees
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Division).string().not_null())
                    .col(
                        ColumnDef::new(Employees::PersonnelNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(
                        ColumnDef::new(Employees::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Employees::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Employees::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Criteria
        manager
            .create_table(
                Table::create()
                    .table(Criteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Criteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Criteria::Division).string().not_null())
                    .col(ColumnDef::new(Criteria::Name).string().not_null())
                    .col(ColumnDef::new(Criteria::Weight).double().not_null())
                    .col(ColumnDef::new(Criteria::Direction).string().not_null())
                    .col(ColumnDef::new(Criteria::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Criteria::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Sub-criteria, removed together with their criterion
        manager
            .create_table(
                Table::create()
                    .table(SubCriteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubCriteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubCriteria::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubCriteria::Name).string().not_null())
                    .col(
                        ColumnDef::new(SubCriteria::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubCriteria::Table, SubCriteria::CriterionId)
                            .to(Criteria::Table, Criteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Appraisals
        manager
            .create_table(
                Table::create()
                    .table(Appraisals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appraisals::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appraisals::EmployeeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appraisals::PeriodMonth)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appraisals::PeriodYear).integer().not_null())
                    .col(ColumnDef::new(Appraisals::FinalScore).double().null())
                    .col(ColumnDef::new(Appraisals::CreatedBy).string().not_null())
                    .col(
                        ColumnDef::new(Appraisals::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Appraisals::Table, Appraisals::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One appraisal per employee per period
        manager
            .create_index(
                Index::create()
                    .name("idx_appraisals_employee_period")
                    .table(Appraisals::Table)
                    .col(Appraisals::EmployeeId)
                    .col(Appraisals::PeriodMonth)
                    .col(Appraisals::PeriodYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appraisals_period")
                    .table(Appraisals::Table)
                    .col(Appraisals::PeriodYear)
                    .col(Appraisals::PeriodMonth)
                    .to_owned(),
            )
            .await?;

        // Score entries. No foreign key to sub_criteria: entries outlive a
        // deleted criterion and are skipped by aggregation.
        manager
            .create_table(
                Table::create()
                    .table(ScoreEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScoreEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::AppraisalId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScoreEntries::SubCriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScoreEntries::Value).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScoreEntries::Table, ScoreEntries::AppraisalId)
                            .to(Appraisals::Table, Appraisals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_score_entries_appraisal_id")
                    .table(ScoreEntries::Table)
                    .col(ScoreEntries::AppraisalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_criteria_division")
                    .table(Criteria::Table)
                    .col(Criteria::Division)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScoreEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Appraisals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubCriteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Criteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employees {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    Division,
    PersonnelNumber,
    Name,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Criteria {
    #[sea_orm(iden = "criteria")]
    Table,
    Id,
    Division,
    Name,
    Weight,
    Direction,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubCriteria {
    #[sea_orm(iden = "sub_criteria")]
    Table,
    Id,
    CriterionId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Appraisals {
    #[sea_orm(iden = "appraisals")]
    Table,
    Id,
    EmployeeId,
    PeriodMonth,
    PeriodYear,
    FinalScore,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ScoreEntries {
    #[sea_orm(iden = "score_entries")]
    Table,
    Id,
    AppraisalId,
    SubCriterionId,
    Value,
}
