use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_student_table::Student,
    m20261001_000005_create_class_group_table::ClassGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupStudent::Table)
                    .if_not_exists()
                    .col(integer(GroupStudent::GroupId))
                    .col(integer(GroupStudent::StudentId))
                    .primary_key(
                        Index::create()
                            .col(GroupStudent::GroupId)
                            .col(GroupStudent::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_student_group_id")
                            .from(GroupStudent::Table, GroupStudent::GroupId)
                            .to(ClassGroup::Table, ClassGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_student_student_id")
                            .from(GroupStudent::Table, GroupStudent::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookups (student -> group) drive the student list and detail views.
        manager
            .create_index(
                Index::create()
                    .name("idx_group_student_student_id")
                    .table(GroupStudent::Table)
                    .col(GroupStudent::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupStudent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupStudent {
    Table,
    GroupId,
    StudentId,
}
