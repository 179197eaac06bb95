use super::*;

/// Tests listing students on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let students = StudentRepository::new(db).get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests that students are listed in id order.
///
/// Expected: Ok with all students ordered by id
#[tokio::test]
async fn lists_students_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let third = factory::create_student(db).await?;

    let students = StudentRepository::new(db).get_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
