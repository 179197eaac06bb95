use super::*;

/// Tests getting an unknown student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db).get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that the payment history is sorted by date descending.
///
/// Payments are inserted out of order, and two share a date so the newest insert
/// must come first among them.
///
/// Expected: Ok with payments ordered by date, then insert order, descending
#[tokio::test]
async fn returns_payment_history_most_recent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_center_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let march = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let january = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    factory::create_payment(db, student.id, march).await?;
    factory::create_payment(db, student.id, january).await?;
    let tie = factory::payment::PaymentFactory::new(db, student.id)
        .date(march)
        .quantity(1.0)
        .build()
        .await?;

    let found = StudentRepository::new(db)
        .get_by_id(student.id)
        .await?
        .unwrap();

    let dates: Vec<_> = found.payment_history.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![march, march, january]);
    assert_eq!(found.payment_history[0].quantity, tie.quantity);

    Ok(())
}
