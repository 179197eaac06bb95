use super::*;

/// Tests deleting a course.
///
/// Expected: Ok with course removed
#[tokio::test]
async fn deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    CourseRepository::new(db).delete(course.id).await?;

    assert!(entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
