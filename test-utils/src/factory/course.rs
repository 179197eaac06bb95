//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::course::Model,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with the fixture price and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::course::entity();
        entity.name = format!("{} {}", fixture::course::DEFAULT_NAME, id);

        Self { db, entity }
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the course price.
    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            price: ActiveValue::Set(self.entity.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
