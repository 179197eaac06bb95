use sea_orm::DatabaseConnection;

use crate::server::{
    data::{course::CourseRepository, group::GroupRepository},
    error::AppError,
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db).create(params).await?;

        tracing::info!("Created course {}", course.id);

        Ok(course)
    }

    pub async fn get_one(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    pub async fn update(&self, params: UpdateCourseParams) -> Result<Course, AppError> {
        let id = params.id;

        CourseRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    /// Deletes a course that no group studies
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if GroupRepository::new(self.db).exists_for_course(id).await? {
            return Err(AppError::BadRequest(format!(
                "Course {} is still taught in a group",
                id
            )));
        }

        CourseRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted course {}", id);

        Ok(())
    }
}
