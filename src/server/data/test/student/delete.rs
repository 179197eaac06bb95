use super::*;

/// Tests deleting a student that has payments and a group.
///
/// Verifies that the payments and the membership go with the student while the
/// group itself stays.
///
/// Expected: Ok with student, payments and membership removed
#[tokio::test]
async fn deletes_student_with_payments_and_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group, student) = factory::helpers::create_student_in_group(db).await?;
    factory::create_payment(db, student.id, Utc::now()).await?;

    StudentRepository::new(db).delete(student.id).await?;

    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GroupStudent::find().count(db).await?, 0);
    assert!(entity::prelude::ClassGroup::find_by_id(group.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an unknown student.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_unknown_student_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db).delete(404).await;

    assert!(result.is_ok());

    Ok(())
}
