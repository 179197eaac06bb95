use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{CreateTeacherParams, Teacher, UpdateTeacherParams};

pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new teacher
    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, DbErr> {
        let entity = entity::teacher::ActiveModel {
            name_first: ActiveValue::Set(params.name.first),
            name_last: ActiveValue::Set(params.name.last),
            phone: ActiveValue::Set(params.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    /// Gets all teachers ordered by id
    pub async fn get_all(&self) -> Result<Vec<Teacher>, DbErr> {
        let teachers = entity::prelude::Teacher::find()
            .order_by_asc(entity::teacher::Column::Id)
            .all(self.db)
            .await?;

        Ok(teachers.into_iter().map(Teacher::from_entity).collect())
    }

    /// Gets a teacher by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(teacher.map(Teacher::from_entity))
    }

    /// Gets the teachers with the given ids; unknown ids are skipped
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Teacher>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::teacher::Column::Id)
            .all(self.db)
            .await?;

        Ok(teachers.into_iter().map(Teacher::from_entity).collect())
    }

    /// Updates the present fields, returning `None` when the teacher does not exist
    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Option<Teacher>, DbErr> {
        let Some(teacher) = entity::prelude::Teacher::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::teacher::ActiveModel = teacher.clone().into();
        if let Some(name) = params.name {
            active_model.name_first = ActiveValue::Set(name.first);
            active_model.name_last = ActiveValue::Set(name.last);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }

        let teacher = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            teacher
        };

        Ok(Some(Teacher::from_entity(teacher)))
    }

    /// Deletes a teacher
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Teacher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
