use super::*;

/// Tests creating a teacher.
///
/// Expected: Ok with stored name and phone
#[tokio::test]
async fn creates_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let teacher = repo
        .create(CreateTeacherParams {
            name: PersonName::new("Nodira", "Yusupova"),
            phone: "+998911234567".to_string(),
        })
        .await?;

    let found = repo.get_by_id(teacher.id).await?.unwrap();
    assert_eq!(found, teacher);
    assert_eq!(found.name.first, "Nodira");

    Ok(())
}
