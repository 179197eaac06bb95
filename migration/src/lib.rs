pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_teacher_table;
mod m20261001_000002_create_course_table;
mod m20261001_000003_create_student_table;
mod m20261001_000004_create_payment_table;
mod m20261001_000005_create_class_group_table;
mod m20261001_000006_create_group_student_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_teacher_table::Migration),
            Box::new(m20261001_000002_create_course_table::Migration),
            Box::new(m20261001_000003_create_student_table::Migration),
            Box::new(m20261001_000004_create_payment_table::Migration),
            Box::new(m20261001_000005_create_class_group_table::Migration),
            Box::new(m20261001_000006_create_group_student_table::Migration),
        ]
    }
}
