use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::payment::{NewPayment, Payment};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a payment to a student's history
    pub async fn create(&self, student_id: i32, payment: NewPayment) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            date: ActiveValue::Set(payment.date),
            quantity: ActiveValue::Set(payment.quantity),
            method: ActiveValue::Set(payment.method),
            info: ActiveValue::Set(payment.info),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    /// Gets a student's payments, most recent date first and newest insert first on ties
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Payment>, DbErr> {
        let payments = Self::history_query(student_id).all(self.db).await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }

    pub(super) fn history_query(student_id: i32) -> sea_orm::Select<entity::payment::Entity> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::StudentId.eq(student_id))
            .order_by_desc(entity::payment::Column::Date)
            .order_by_desc(entity::payment::Column::Id)
    }
}
