//! Group operations.
//!
//! Writes check that the referenced teacher, course and students exist before touching
//! the store, so a bad reference is reported as a client error rather than surfacing as a
//! foreign key failure.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, group::GroupRepository, student::StudentRepository,
        teacher::TeacherRepository,
    },
    error::AppError,
    model::group::{CreateGroupParams, GroupDetail, GroupListItem, UpdateGroupParams},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GroupListItem>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Creates a group after checking its references.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The created group with references resolved
    /// - `Err(AppError::BadRequest)` - Teacher, course or a listed student does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateGroupParams) -> Result<GroupDetail, AppError> {
        self.check_references(
            Some(params.teacher_id),
            Some(params.course_id),
            Some(params.student_ids.as_slice()),
        )
        .await?;

        let group = GroupRepository::new(self.db).create(params).await?;

        tracing::info!("Created group {}", group.id);

        self.get_one(group.id).await
    }

    /// Gets a group with its teacher, course and members.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - Group found
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_one(&self, id: i32) -> Result<GroupDetail, AppError> {
        let group_repo = GroupRepository::new(self.db);

        let group = group_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        let teacher = TeacherRepository::new(self.db)
            .get_by_id(group.teacher_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Group {} references missing teacher {}",
                    id, group.teacher_id
                ))
            })?;

        let course = CourseRepository::new(self.db)
            .get_by_id(group.course_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Group {} references missing course {}",
                    id, group.course_id
                ))
            })?;

        let student_ids = group_repo.get_student_ids(id).await?;
        let students = StudentRepository::new(self.db)
            .get_by_ids(&student_ids)
            .await?;

        Ok(GroupDetail {
            group,
            course,
            teacher,
            students,
        })
    }

    /// Updates the present fields after checking the references among them.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The updated group with references resolved
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::BadRequest)` - A referenced teacher, course or student does not exist
    pub async fn update(&self, params: UpdateGroupParams) -> Result<GroupDetail, AppError> {
        let id = params.id;

        self.check_references(
            params.teacher_id,
            params.course_id,
            params.student_ids.as_deref(),
        )
        .await?;

        GroupRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        tracing::info!("Updated group {}", id);

        self.get_one(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        GroupRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted group {}", id);

        Ok(())
    }

    async fn check_references(
        &self,
        teacher_id: Option<i32>,
        course_id: Option<i32>,
        student_ids: Option<&[i32]>,
    ) -> Result<(), AppError> {
        if let Some(teacher_id) = teacher_id {
            if TeacherRepository::new(self.db)
                .get_by_id(teacher_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Teacher {} does not exist",
                    teacher_id
                )));
            }
        }

        if let Some(course_id) = course_id {
            if CourseRepository::new(self.db)
                .get_by_id(course_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Course {} does not exist",
                    course_id
                )));
            }
        }

        if let Some(student_ids) = student_ids {
            let found: Vec<i32> = StudentRepository::new(self.db)
                .get_by_ids(student_ids)
                .await?
                .into_iter()
                .map(|s| s.id)
                .collect();

            if let Some(missing) = student_ids.iter().find(|id| !found.contains(id)) {
                return Err(AppError::BadRequest(format!(
                    "Student {} does not exist",
                    missing
                )));
            }
        }

        Ok(())
    }
}
