use super::*;

/// Tests deleting a group with members.
///
/// Verifies that memberships are removed while the students stay.
///
/// Expected: Ok with group and memberships removed
#[tokio::test]
async fn deletes_group_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group, student) = factory::helpers::create_student_in_group(db).await?;

    GroupRepository::new(db).delete(group.id).await?;

    assert!(entity::prelude::ClassGroup::find_by_id(group.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::GroupStudent::find().count(db).await?, 0);
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests the reference checks used before deleting a teacher or course.
///
/// Expected: true for the referenced teacher and course, false otherwise
#[tokio::test]
async fn detects_referenced_teacher_and_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course, _) = factory::helpers::create_group_with_dependencies(db).await?;
    let idle_teacher = factory::create_teacher(db).await?;
    let idle_course = factory::create_course(db).await?;

    let repo = GroupRepository::new(db);
    assert!(repo.exists_for_teacher(teacher.id).await?);
    assert!(repo.exists_for_course(course.id).await?);
    assert!(!repo.exists_for_teacher(idle_teacher.id).await?);
    assert!(!repo.exists_for_course(idle_course.id).await?);

    Ok(())
}
