//! Group data repository for database operations.
//!
//! Groups keep their members in the `group_student` join table. A student is expected to
//! be in at most one group; the store does not enforce this, so lookups that resolve
//! "the" group of a student take the membership with the lowest group id.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{
    days_to_json, CreateGroupParams, Group, GroupListItem, UpdateGroupParams,
};

/// Repository providing database operations for groups and their memberships.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group and one membership row per listed student.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error during insert, including unknown course or teacher
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let group = entity::class_group::ActiveModel {
            name: ActiveValue::Set(params.name),
            course_id: ActiveValue::Set(params.course_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            days: ActiveValue::Set(days_to_json(&params.days)),
            time: ActiveValue::Set(params.time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_members(group.id, &params.student_ids).await?;

        Ok(Group::from_entity(group))
    }

    /// Gets all groups ordered by id with their member counts.
    pub async fn get_all(&self) -> Result<Vec<GroupListItem>, DbErr> {
        let groups = entity::prelude::ClassGroup::find()
            .order_by_asc(entity::class_group::Column::Id)
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for membership in entity::prelude::GroupStudent::find().all(self.db).await? {
            *counts.entry(membership.group_id).or_default() += 1;
        }

        Ok(groups
            .into_iter()
            .map(|group| GroupListItem {
                student_count: counts.get(&group.id).copied().unwrap_or(0),
                group: Group::from_entity(group),
            })
            .collect())
    }

    /// Gets a group by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let group = entity::prelude::ClassGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(group.map(Group::from_entity))
    }

    /// Gets the ids of a group's members in ascending order.
    pub async fn get_student_ids(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        let memberships = entity::prelude::GroupStudent::find()
            .filter(entity::group_student::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_student::Column::StudentId)
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.student_id).collect())
    }

    /// Updates the present fields of a group.
    ///
    /// A present `student_ids` list replaces the group's whole membership.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The updated group
    /// - `Ok(None)` - No group with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::ClassGroup::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::class_group::ActiveModel = group.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(course_id) = params.course_id {
            active_model.course_id = ActiveValue::Set(course_id);
        }
        if let Some(teacher_id) = params.teacher_id {
            active_model.teacher_id = ActiveValue::Set(teacher_id);
        }
        if let Some(days) = params.days {
            active_model.days = ActiveValue::Set(days_to_json(&days));
        }
        if let Some(time) = params.time {
            active_model.time = ActiveValue::Set(Some(time));
        }

        let group = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            group
        };

        if let Some(student_ids) = params.student_ids {
            entity::prelude::GroupStudent::delete_many()
                .filter(entity::group_student::Column::GroupId.eq(group.id))
                .exec(self.db)
                .await?;

            self.insert_members(group.id, &student_ids).await?;
        }

        Ok(Some(Group::from_entity(group)))
    }

    /// Deletes a group and its memberships.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::GroupStudent::delete_many()
            .filter(entity::group_student::Column::GroupId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::ClassGroup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves the group of each student that has one.
    ///
    /// # Arguments
    /// - `student_ids` - Students to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Group>)` - Group keyed by student id; unassigned students are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn first_group_for_students(
        &self,
        student_ids: &[i32],
    ) -> Result<HashMap<i32, Group>, DbErr> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::GroupStudent::find()
            .filter(entity::group_student::Column::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(entity::group_student::Column::GroupId)
            .all(self.db)
            .await?;

        let mut group_by_student: HashMap<i32, i32> = HashMap::new();
        for membership in memberships {
            group_by_student
                .entry(membership.student_id)
                .or_insert(membership.group_id);
        }

        let mut group_ids: Vec<i32> = group_by_student.values().copied().collect();
        group_ids.sort_unstable();
        group_ids.dedup();

        let groups: HashMap<i32, Group> = entity::prelude::ClassGroup::find()
            .filter(entity::class_group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, Group::from_entity(g)))
            .collect();

        Ok(group_by_student
            .into_iter()
            .filter_map(|(student_id, group_id)| {
                groups.get(&group_id).map(|g| (student_id, g.clone()))
            })
            .collect())
    }

    /// Resolves the group of one student.
    pub async fn first_group_for_student(&self, student_id: i32) -> Result<Option<Group>, DbErr> {
        let mut groups = self.first_group_for_students(&[student_id]).await?;

        Ok(groups.remove(&student_id))
    }

    /// Checks whether any group is taught by this teacher.
    pub async fn exists_for_teacher(&self, teacher_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ClassGroup::find()
            .filter(entity::class_group::Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any group studies this course.
    pub async fn exists_for_course(&self, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ClassGroup::find()
            .filter(entity::class_group::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn insert_members(&self, group_id: i32, student_ids: &[i32]) -> Result<(), DbErr> {
        let mut seen = Vec::with_capacity(student_ids.len());
        for &student_id in student_ids {
            if seen.contains(&student_id) {
                continue;
            }
            seen.push(student_id);

            entity::group_student::ActiveModel {
                group_id: ActiveValue::Set(group_id),
                student_id: ActiveValue::Set(student_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
