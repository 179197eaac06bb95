use super::*;

/// Tests that payments of other students are not returned.
///
/// Expected: Ok with only the requested student's payments, newest first
#[tokio::test]
async fn returns_only_payments_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let may = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
    let june = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();

    factory::create_payment(db, student.id, may).await?;
    factory::create_payment(db, other.id, june).await?;
    factory::create_payment(db, student.id, june).await?;

    let payments = PaymentRepository::new(db).get_by_student(student.id).await?;

    let dates: Vec<_> = payments.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![june, may]);

    Ok(())
}

/// Tests a student without payments.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let payments = PaymentRepository::new(db).get_by_student(student.id).await?;

    assert!(payments.is_empty());

    Ok(())
}
