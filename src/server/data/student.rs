//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records and their
//! payment history. Payments are stored in their own table and loaded in history order
//! whenever a full student is returned.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::payment::PaymentRepository,
    model::student::{CreateStudentParams, Student, StudentSummary, UpdateStudentParams},
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a student together with its initial payment history.
    ///
    /// # Arguments
    /// - `params` - Name, phone, info and initial payments
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with payments in history order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            name_first: ActiveValue::Set(params.name.first),
            name_last: ActiveValue::Set(params.name.last),
            phone: ActiveValue::Set(params.phone),
            info: ActiveValue::Set(params.info),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let payment_repo = PaymentRepository::new(self.db);
        for payment in params.payment_history {
            payment_repo.create(student.id, payment).await?;
        }

        let payments = PaymentRepository::history_query(student.id)
            .all(self.db)
            .await?;

        Ok(Student::from_entity(student, payments))
    }

    /// Gets every student ordered by id.
    pub async fn get_all(&self) -> Result<Vec<StudentSummary>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(StudentSummary::from_entity).collect())
    }

    /// Gets a student with its payment history.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let payments = PaymentRepository::history_query(id).all(self.db).await?;

        Ok(Some(Student::from_entity(student, payments)))
    }

    /// Gets the students with the given ids ordered by id. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<StudentSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(StudentSummary::from_entity).collect())
    }

    /// Updates the fields present in `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student with its payment history
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = student.clone().into();
        if let Some(name) = params.name {
            active_model.name_first = ActiveValue::Set(name.first);
            active_model.name_last = ActiveValue::Set(name.last);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(info) = params.info {
            active_model.info = ActiveValue::Set(Some(info));
        }

        let student = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            student
        };

        let payments = PaymentRepository::history_query(student.id)
            .all(self.db)
            .await?;

        Ok(Some(Student::from_entity(student, payments)))
    }

    /// Deletes a student with its payments and group memberships.
    ///
    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Payment::delete_many()
            .filter(entity::payment::Column::StudentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::GroupStudent::delete_many()
            .filter(entity::group_student::Column::StudentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the students that have no group membership, ordered by id.
    pub async fn get_unassigned(&self) -> Result<Vec<StudentSummary>, DbErr> {
        let students = entity::prelude::Student::find()
            .filter(
                entity::student::Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::group_student::Column::StudentId)
                        .from(entity::group_student::Entity)
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(StudentSummary::from_entity).collect())
    }

    /// Checks whether a student with this id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
