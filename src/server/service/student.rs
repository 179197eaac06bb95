//! Student operations.
//!
//! Most reads here combine several repositories: the list view needs each student's
//! group and that group's teacher, the detail view additionally resolves the course.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, group::GroupRepository, payment::PaymentRepository,
        student::StudentRepository, teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        payment::NewPayment,
        student::{
            CreateStudentParams, Student, StudentDetail, StudentListItem, StudentSummary,
            UpdateStudentParams,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every student with the name of its group and of the group's teacher.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentListItem>)` - Students in id order; unassigned students carry no names
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<StudentListItem>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        let student_ids: Vec<i32> = students.iter().map(|s| s.id).collect();
        let groups = GroupRepository::new(self.db)
            .first_group_for_students(&student_ids)
            .await?;

        let mut teacher_ids: Vec<i32> = groups.values().map(|g| g.teacher_id).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        let teachers: HashMap<i32, _> = TeacherRepository::new(self.db)
            .get_by_ids(&teacher_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        Ok(students
            .into_iter()
            .map(|student| {
                let group = groups.get(&student.id);
                let teacher = group.and_then(|g| teachers.get(&g.teacher_id));

                StudentListItem {
                    id: student.id,
                    name: student.name,
                    phone: student.phone,
                    group_name: group.map(|g| g.name.clone()),
                    teacher_name: teacher.map(|t| t.name.clone()),
                }
            })
            .collect())
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created student {} with {} initial payments",
            student.id,
            student.payment_history.len()
        );

        Ok(student)
    }

    /// Gets a student merged with its group, teacher and course.
    ///
    /// # Returns
    /// - `Ok(Some(StudentDetail))` - Student found; group fields are `None` when unassigned
    /// - `Ok(None)` - No student with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_one(&self, id: i32) -> Result<Option<StudentDetail>, AppError> {
        let Some(student) = StudentRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let group = GroupRepository::new(self.db)
            .first_group_for_student(id)
            .await?;

        let (teacher, course) = match &group {
            Some(group) => (
                TeacherRepository::new(self.db)
                    .get_by_id(group.teacher_id)
                    .await?,
                CourseRepository::new(self.db)
                    .get_by_id(group.course_id)
                    .await?,
            ),
            None => (None, None),
        };

        Ok(Some(StudentDetail {
            student,
            group,
            teacher,
            course,
        }))
    }

    /// Updates the present fields, returning `None` for an unknown id.
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let id = params.id;
        let student = StudentRepository::new(self.db).update(params).await?;

        if student.is_some() {
            tracing::info!("Updated student {}", id);
        }

        Ok(student)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        StudentRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted student {}", id);

        Ok(())
    }

    /// Appends a payment to a student's history.
    ///
    /// A payment for an unknown student is dropped with a warning and is not an error.
    pub async fn make_payment(&self, student_id: i32, payment: NewPayment) -> Result<(), AppError> {
        if !StudentRepository::new(self.db).exists(student_id).await? {
            tracing::warn!("Ignoring payment for unknown student {}", student_id);
            return Ok(());
        }

        let payment = PaymentRepository::new(self.db)
            .create(student_id, payment)
            .await?;

        tracing::info!(
            "Added payment of {} to student {}",
            payment.quantity,
            student_id
        );

        Ok(())
    }

    pub async fn get_unassigned(&self) -> Result<Vec<StudentSummary>, AppError> {
        Ok(StudentRepository::new(self.db).get_unassigned().await?)
    }
}
