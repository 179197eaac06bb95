//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Defaults come from `fixture::student` with a unique last name and phone number so
/// several students can coexist in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Aziz", "Karimov")
///     .info(Some("Prefers evening classes"))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .name(fixture::student::DEFAULT_FIRST_NAME, format!("Student{}", id))
            .phone(format!("+99890{:07}", id))
            .build();

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

    /// Sets the free-form info.
    pub fn info(mut self, info: Option<&str>) -> Self {
        self.entity.info = info.map(str::to_string);
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name_first: ActiveValue::Set(self.entity.name_first),
            name_last: ActiveValue::Set(self.entity.name_last),
            phone: ActiveValue::Set(self.entity.phone),
            info: ActiveValue::Set(self.entity.info),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_student_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_student_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let student = create_student(db).await?;

        assert!(student.id > 0);
        assert_eq!(student.name_first, fixture::student::DEFAULT_FIRST_NAME);
        assert!(student.phone.starts_with("+99890"));
        assert!(student.info.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_students() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_student_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_student(db).await?;
        let second = create_student(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.phone, second.phone);

        Ok(())
    }
}
