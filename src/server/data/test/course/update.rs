use super::*;

/// Tests changing the price of a course.
///
/// Expected: Ok(Some) with new price and unchanged name
#[tokio::test]
async fn updates_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .name("Math")
        .build()
        .await?;

    let updated = CourseRepository::new(db)
        .update(UpdateCourseParams {
            id: course.id,
            name: None,
            price: Some(500000.0),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Math");
    assert_eq!(updated.price, 500000.0);

    Ok(())
}
