use super::*;

/// Tests creating a student without payments.
///
/// Verifies that the repository stores name, phone and info and assigns an id.
///
/// Expected: Ok with stored student and empty payment history
#[tokio::test]
async fn creates_student_without_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            name: PersonName::new("Aziz", "Karimov"),
            phone: "+998901112233".to_string(),
            info: Some("Evening only".to_string()),
            payment_history: vec![],
        })
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.name, PersonName::new("Aziz", "Karimov"));
    assert_eq!(student.phone, "+998901112233");
    assert_eq!(student.info.as_deref(), Some("Evening only"));
    assert!(student.payment_history.is_empty());

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name_first, "Aziz");

    Ok(())
}

/// Tests creating a student with an initial payment history.
///
/// Verifies that every initial payment is stored and returned most recent first.
///
/// Expected: Ok with two payments sorted by date descending
#[tokio::test]
async fn creates_student_with_initial_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            name: PersonName::new("Malika", "Rahimova"),
            phone: "+998935556677".to_string(),
            info: None,
            payment_history: vec![
                NewPayment {
                    date: older,
                    quantity: 300000.0,
                    method: Some("cash".to_string()),
                    info: None,
                },
                NewPayment {
                    date: newer,
                    quantity: 350000.0,
                    method: Some("card".to_string()),
                    info: Some("February".to_string()),
                },
            ],
        })
        .await?;

    assert_eq!(student.payment_history.len(), 2);
    assert_eq!(student.payment_history[0].date, newer);
    assert_eq!(student.payment_history[1].date, older);

    let count = entity::prelude::Payment::find()
        .filter(entity::payment::Column::StudentId.eq(student.id))
        .count(db)
        .await?;
    assert_eq!(count, 2);

    Ok(())
}
