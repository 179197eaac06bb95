use super::*;

/// Tests updating only the phone of a student.
///
/// Verifies that fields absent from the update keep their stored value.
///
/// Expected: Ok(Some) with new phone and unchanged name and info
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .name("Bekzod", "Aliyev")
        .info(Some("Beginner"))
        .build()
        .await?;

    let updated = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: student.id,
            name: None,
            phone: Some("+998977778899".to_string()),
            info: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.phone, "+998977778899");
    assert_eq!(updated.name, PersonName::new("Bekzod", "Aliyev"));
    assert_eq!(updated.info.as_deref(), Some("Beginner"));

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok(Some) with the stored student
#[tokio::test]
async fn empty_update_returns_stored_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let updated = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: student.id,
            name: None,
            phone: None,
            info: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.phone, student.phone);

    Ok(())
}

/// Tests updating an unknown student.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: 42,
            name: Some(PersonName::new("Ghost", "Student")),
            phone: None,
            info: None,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}
