use super::*;

/// Tests that only students without a membership are returned.
///
/// Expected: Ok with exactly the students outside every group
#[tokio::test]
async fn returns_only_students_without_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, assigned) = factory::helpers::create_student_in_group(db).await?;
    let free_one = factory::create_student(db).await?;
    let free_two = factory::create_student(db).await?;

    let students = StudentRepository::new(db).get_unassigned().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![free_one.id, free_two.id]);
    assert!(!ids.contains(&assigned.id));

    Ok(())
}

/// Tests that every student is unassigned when no group exists.
///
/// Expected: Ok with all students
#[tokio::test]
async fn returns_all_students_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student(db).await?;
    factory::create_student(db).await?;

    let students = StudentRepository::new(db).get_unassigned().await?;

    assert_eq!(students.len(), 2);

    Ok(())
}
