use super::*;

/// Tests appending a payment.
///
/// Verifies that all fields of the payment are stored as given.
///
/// Expected: Ok with the stored payment
#[tokio::test]
async fn appends_payment_to_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let date = Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap();

    let payment = PaymentRepository::new(db)
        .create(
            student.id,
            NewPayment {
                date,
                quantity: 420000.0,
                method: Some("transfer".to_string()),
                info: Some("September".to_string()),
            },
        )
        .await?;

    assert_eq!(payment.date, date);
    assert_eq!(payment.quantity, 420000.0);
    assert_eq!(payment.method.as_deref(), Some("transfer"));
    assert_eq!(payment.info.as_deref(), Some("September"));

    Ok(())
}

/// Tests appending a payment for a student that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentRepository::new(db)
        .create(
            999,
            NewPayment {
                date: Utc::now(),
                quantity: 0.0,
                method: None,
                info: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
