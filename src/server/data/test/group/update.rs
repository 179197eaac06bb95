use super::*;

/// Tests that a present student list replaces the membership.
///
/// Expected: Ok(Some) with only the new student as member
#[tokio::test]
async fn replaces_members_when_list_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group, old_member) = factory::helpers::create_student_in_group(db).await?;
    let new_member = factory::create_student(db).await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(UpdateGroupParams {
            id: group.id,
            name: Some("Renamed".to_string()),
            course_id: None,
            teacher_id: None,
            student_ids: Some(vec![new_member.id]),
            days: None,
            time: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.days, vec!["Mon", "Wed", "Fri"]);
    let members = repo.get_student_ids(group.id).await?;
    assert_eq!(members, vec![new_member.id]);
    assert!(!members.contains(&old_member.id));

    Ok(())
}

/// Tests that an absent student list keeps the membership.
///
/// Expected: Ok(Some) with the original member still present
#[tokio::test]
async fn keeps_members_when_list_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group, member) = factory::helpers::create_student_in_group(db).await?;

    let repo = GroupRepository::new(db);
    repo.update(UpdateGroupParams {
        id: group.id,
        name: None,
        course_id: None,
        teacher_id: None,
        student_ids: None,
        days: Some(vec!["Sat".to_string()]),
        time: None,
    })
    .await?;

    assert_eq!(repo.get_student_ids(group.id).await?, vec![member.id]);
    let stored = repo.get_by_id(group.id).await?.unwrap();
    assert_eq!(stored.days, vec!["Sat"]);

    Ok(())
}

/// Tests updating an unknown group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupRepository::new(db)
        .update(UpdateGroupParams {
            id: 7,
            name: Some("Nothing".to_string()),
            course_id: None,
            teacher_id: None,
            student_ids: None,
            days: None,
            time: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
