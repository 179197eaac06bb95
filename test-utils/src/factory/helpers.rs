//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a teacher, a course and an empty group taught by that teacher.
///
/// # Returns
/// - `Ok((teacher, course, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::teacher::Model,
        entity::course::Model,
        entity::class_group::Model,
    ),
    DbErr,
> {
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let group = crate::factory::class_group::create_group(db, course.id, teacher.id).await?;

    Ok((teacher, course, group))
}

/// Creates a student who is the only member of a freshly created group.
///
/// # Returns
/// - `Ok((teacher, course, group, student))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_in_group(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::teacher::Model,
        entity::course::Model,
        entity::class_group::Model,
        entity::student::Model,
    ),
    DbErr,
> {
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let student = crate::factory::student::create_student(db).await?;
    let group = crate::factory::class_group::GroupFactory::new(db, course.id, teacher.id)
        .students(vec![student.id])
        .build()
        .await?;

    Ok((teacher, course, group, student))
}
