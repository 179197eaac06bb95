use super::*;

/// Tests creating a group with members.
///
/// Verifies that the group row and one membership per student are stored.
///
/// Expected: Ok with group and two memberships
#[tokio::test]
async fn creates_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::create_course(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "IELTS Evening".to_string(),
            course_id: course.id,
            teacher_id: teacher.id,
            student_ids: vec![first.id, second.id],
            days: vec!["Tue".to_string(), "Thu".to_string()],
            time: Some("19:00".to_string()),
        })
        .await?;

    assert_eq!(group.name, "IELTS Evening");
    assert_eq!(group.days, vec!["Tue", "Thu"]);
    assert_eq!(group.time.as_deref(), Some("19:00"));
    assert_eq!(
        repo.get_student_ids(group.id).await?,
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests that a student listed twice gets a single membership.
///
/// Expected: Ok with one membership row
#[tokio::test]
async fn ignores_duplicate_student_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let course = factory::create_course(db).await?;
    let student = factory::create_student(db).await?;

    let group = GroupRepository::new(db)
        .create(CreateGroupParams {
            name: "Kids".to_string(),
            course_id: course.id,
            teacher_id: teacher.id,
            student_ids: vec![student.id, student.id],
            days: vec![],
            time: None,
        })
        .await?;

    let count = entity::prelude::GroupStudent::find()
        .filter(entity::group_student::Column::GroupId.eq(group.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
