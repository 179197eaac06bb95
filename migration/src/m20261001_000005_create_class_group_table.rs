use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_teacher_table::Teacher,
    m20261001_000002_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassGroup::Id))
                    .col(string(ClassGroup::Name))
                    .col(integer(ClassGroup::CourseId))
                    .col(integer(ClassGroup::TeacherId))
                    .col(json(ClassGroup::Days))
                    .col(string_null(ClassGroup::Time))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_group_course_id")
                            .from(ClassGroup::Table, ClassGroup::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_group_teacher_id")
                            .from(ClassGroup::Table, ClassGroup::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassGroup {
    Table,
    Id,
    Name,
    CourseId,
    TeacherId,
    Days,
    Time,
}
