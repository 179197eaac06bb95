use super::*;

/// Tests resolving groups for a mix of assigned and unassigned students.
///
/// Expected: Ok with an entry only for the assigned student
#[tokio::test]
async fn maps_assigned_students_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group, assigned) = factory::helpers::create_student_in_group(db).await?;
    let unassigned = factory::create_student(db).await?;

    let groups = GroupRepository::new(db)
        .first_group_for_students(&[assigned.id, unassigned.id])
        .await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[&assigned.id].id, group.id);
    assert!(!groups.contains_key(&unassigned.id));

    Ok(())
}

/// Tests a student that is a member of two groups.
///
/// Expected: Ok with the group that has the lowest id
#[tokio::test]
async fn picks_lowest_group_id_for_multiple_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::create_course(db).await?;
    let student = factory::create_student(db).await?;
    let first = factory::class_group::GroupFactory::new(db, course.id, teacher.id)
        .students(vec![student.id])
        .build()
        .await?;
    factory::class_group::GroupFactory::new(db, course.id, teacher.id)
        .students(vec![student.id])
        .build()
        .await?;

    let group = GroupRepository::new(db)
        .first_group_for_student(student.id)
        .await?
        .unwrap();

    assert_eq!(group.id, first.id);

    Ok(())
}

/// Tests resolving an empty id list.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn empty_input_returns_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let groups = GroupRepository::new(db).first_group_for_students(&[]).await?;

    assert!(groups.is_empty());

    Ok(())
}
