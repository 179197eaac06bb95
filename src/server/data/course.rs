use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::course::{Course, CreateCourseParams, UpdateCourseParams};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Gets all courses ordered by id
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(courses.into_iter().map(Course::from_entity).collect())
    }

    /// Gets a course by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(course.map(Course::from_entity))
    }

    /// Updates the present fields, returning `None` when the course does not exist
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }

        let course = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            course
        };

        Ok(Some(Course::from_entity(course)))
    }

    /// Deletes a course
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
