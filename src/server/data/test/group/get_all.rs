use super::*;

/// Tests that the group list carries member counts.
///
/// Expected: Ok with each group's number of students
#[tokio::test]
async fn lists_groups_with_student_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, course, full, _) = factory::helpers::create_student_in_group(db).await?;
    let empty = factory::create_group(db, course.id, teacher.id).await?;

    let groups = GroupRepository::new(db).get_all().await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group.id, full.id);
    assert_eq!(groups[0].student_count, 1);
    assert_eq!(groups[1].group.id, empty.id);
    assert_eq!(groups[1].student_count, 0);

    Ok(())
}
