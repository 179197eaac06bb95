//! Payment factory for creating test payment records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default quantity of a test payment.
pub const DEFAULT_QUANTITY: f64 = 400_000.0;

/// Default payment method of a test payment.
pub const DEFAULT_METHOD: &str = "cash";

/// Factory for creating payment records attached to an existing student.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    date: DateTime<Utc>,
    quantity: f64,
    method: Option<String>,
    info: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory dated now with the default quantity and method.
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            date: Utc::now(),
            quantity: DEFAULT_QUANTITY,
            method: Some(DEFAULT_METHOD.to_string()),
            info: None,
        }
    }

    /// Sets the payment date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the paid quantity.
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the payment method.
    pub fn method(mut self, method: Option<&str>) -> Self {
        self.method = method.map(str::to_string);
        self
    }

    /// Sets the free-text info.
    pub fn info(mut self, info: Option<&str>) -> Self {
        self.info = info.map(str::to_string);
        self
    }

    /// Builds and inserts the payment record.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            date: ActiveValue::Set(self.date),
            quantity: ActiveValue::Set(self.quantity),
            method: ActiveValue::Set(self.method),
            info: ActiveValue::Set(self.info),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values dated at the given instant.
pub async fn create_payment(
    db: &DatabaseConnection,
    student_id: i32,
    date: DateTime<Utc>,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, student_id).date(date).build().await
}
