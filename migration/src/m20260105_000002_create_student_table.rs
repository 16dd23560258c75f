use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::SchoolId))
                    .col(string_len(Student::FirstName, 64))
                    .col(string_len(Student::LastName, 64))
                    .col(string_len_uniq(Student::StudentId, 36))
                    .col(integer_null(Student::AgeHundredths))
                    .col(string_len(Student::Nationality, 80))
                    .col(text(Student::Address).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_school_id")
                            .from(Student::Table, Student::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_school_id")
                    .table(Student::Table)
                    .col(Student::SchoolId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    SchoolId,
    FirstName,
    LastName,
    StudentId,
    AgeHundredths,
    Nationality,
    Address,
}
