//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::teacher::Model,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values from fixture and a unique phone.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::teacher::entity();
        entity.name_last = format!("Teacher{}", id);
        entity.phone = format!("+99891{:07}", id);

        Self { db, entity }
    }

    /// Sets the first and last name.
    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.entity.name_first = first.into();
        self.entity.name_last = last.into();
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.entity.phone = phone.into();
        self
    }

    /// Builds and inserts the teacher entity into the database.
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            id: ActiveValue::NotSet,
            name_first: ActiveValue::Set(self.entity.name_first),
            name_last: ActiveValue::Set(self.entity.name_last),
            phone: ActiveValue::Set(self.entity.phone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
