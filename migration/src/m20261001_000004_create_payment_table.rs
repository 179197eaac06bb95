use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::StudentId))
                    .col(timestamp_with_time_zone(Payment::Date))
                    .col(double(Payment::Quantity).default(0.0))
                    .col(string_null(Payment::Method))
                    .col(text_null(Payment::Info))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_student_id")
                            .from(Payment::Table, Payment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_student_id_date")
                    .table(Payment::Table)
                    .col(Payment::StudentId)
                    .col(Payment::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    StudentId,
    Date,
    Quantity,
    Method,
    Info,
}
