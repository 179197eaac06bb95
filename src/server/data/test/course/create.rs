use super::*;

/// Tests creating a course and listing it.
///
/// Expected: Ok with the course in the list
#[tokio::test]
async fn creates_and_lists_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParams {
            name: "IELTS".to_string(),
            price: 650000.0,
        })
        .await?;

    let courses = repo.get_all().await?;
    assert_eq!(courses, vec![course]);
    assert_eq!(courses[0].price, 650000.0);

    Ok(())
}
