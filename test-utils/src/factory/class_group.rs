//! Group factory for creating test groups and their memberships.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// The referenced course and teacher must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class_group::GroupFactory;
///
/// let group = GroupFactory::new(&db, course.id, teacher.id)
///     .name("IELTS Evening")
///     .students(vec![student.id])
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::class_group::Model,
    students: Vec<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with fixture defaults and no members.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_id` - Course the group studies
    /// - `teacher_id` - Teacher leading the group
    pub fn new(db: &'a DatabaseConnection, course_id: i32, teacher_id: i32) -> Self {
        let id = next_id();
        let mut entity = fixture::class_group::entity();
        entity.name = format!("Group {}", id);
        entity.course_id = course_id;
        entity.teacher_id = teacher_id;

        Self {
            db,
            entity,
            students: Vec::new(),
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the weekdays the group meets on.
    pub fn days(mut self, days: &[&str]) -> Self {
        self.entity.days = serde_json::json!(days);
        self
    }

    /// Sets the lesson start time.
    pub fn time(mut self, time: Option<&str>) -> Self {
        self.entity.time = time.map(str::to_string);
        self
    }

    /// Sets the member student ids.
    pub fn students(mut self, students: Vec<i32>) -> Self {
        self.students = students;
        self
    }

    /// Builds and inserts the group and one membership row per student.
    ///
    /// # Returns
    /// - `Ok(entity::class_group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class_group::Model, DbErr> {
        let group = entity::class_group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            course_id: ActiveValue::Set(self.entity.course_id),
            teacher_id: ActiveValue::Set(self.entity.teacher_id),
            days: ActiveValue::Set(self.entity.days),
            time: ActiveValue::Set(self.entity.time),
        }
        .insert(self.db)
        .await?;

        for student_id in self.students {
            entity::group_student::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                student_id: ActiveValue::Set(student_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }
}

/// Creates an empty group with default values.
pub async fn create_group(
    db: &DatabaseConnection,
    course_id: i32,
    teacher_id: i32,
) -> Result<entity::class_group::Model, DbErr> {
    GroupFactory::new(db, course_id, teacher_id).build().await
}
