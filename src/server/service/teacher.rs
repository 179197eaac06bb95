use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, teacher::TeacherRepository},
    error::AppError,
    model::teacher::{CreateTeacherParams, Teacher, UpdateTeacherParams},
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, AppError> {
        let teacher = TeacherRepository::new(self.db).create(params).await?;

        tracing::info!("Created teacher {}", teacher.id);

        Ok(teacher)
    }

    /// Gets a teacher, failing with `NotFound` for an unknown id
    pub async fn get_one(&self, id: i32) -> Result<Teacher, AppError> {
        TeacherRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Teacher {} not found", id)))
    }

    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Teacher, AppError> {
        let id = params.id;

        TeacherRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Teacher {} not found", id)))
    }

    /// Deletes a teacher that no group references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if GroupRepository::new(self.db).exists_for_teacher(id).await? {
            return Err(AppError::BadRequest(format!(
                "Teacher {} still leads a group",
                id
            )));
        }

        TeacherRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted teacher {}", id);

        Ok(())
    }
}
