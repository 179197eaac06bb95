use super::*;

/// Tests that unknown ids are skipped.
///
/// Expected: Ok with the existing teachers only
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_teacher(db).await?;
    let second = factory::create_teacher(db).await?;

    let teachers = TeacherRepository::new(db)
        .get_by_ids(&[second.id, 999, first.id])
        .await?;

    let ids: Vec<i32> = teachers.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
