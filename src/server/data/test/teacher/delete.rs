use super::*;

/// Tests deleting a teacher without groups.
///
/// Expected: Ok with teacher removed
#[tokio::test]
async fn deletes_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;

    TeacherRepository::new(db).delete(teacher.id).await?;

    assert!(entity::prelude::Teacher::find_by_id(teacher.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
