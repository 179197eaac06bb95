use super::*;

/// Tests renaming a teacher.
///
/// Expected: Ok(Some) with new name and unchanged phone
#[tokio::test]
async fn updates_name_keeps_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    let updated = TeacherRepository::new(db)
        .update(UpdateTeacherParams {
            id: teacher.id,
            name: Some(PersonName::new("Jamshid", "Tursunov")),
            phone: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, PersonName::new("Jamshid", "Tursunov"));
    assert_eq!(updated.phone, teacher.phone);

    Ok(())
}

/// Tests updating an unknown teacher.
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

    let result = TeacherRepository::new(db)
        .update(UpdateTeacherParams {
            id: 3,
            name: None,
            phone: Some("+998900000000".to_string()),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
