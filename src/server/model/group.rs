//! Group domain models and parameters.

use crate::{
    model::{
        group::{CreateGroupDto, GroupDetailDto, GroupDto, UpdateGroupDto},
        student::StudentGroupDto,
    },
    server::model::{course::Course, student::StudentSummary, teacher::Teacher},
};

/// A group with its references left as ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub course_id: i32,
    pub teacher_id: i32,
    pub days: Vec<String>,
    pub time: Option<String>,
}

impl Group {
    /// Converts the entity model, keeping only the string entries of the `days` column.
    pub fn from_entity(entity: entity::class_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            course_id: entity.course_id,
            teacher_id: entity.teacher_id,
            days: days_from_json(&entity.days),
            time: entity.time,
        }
    }

    /// The group block of a student's detail view.
    pub fn into_student_group_dto(self) -> StudentGroupDto {
        StudentGroupDto {
            id: self.id,
            name: self.name,
            course: self.course_id,
            teacher: self.teacher_id,
            days: self.days,
            time: self.time,
        }
    }
}

pub fn days_from_json(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|days| {
            days.iter()
                .filter_map(|day| day.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn days_to_json(days: &[String]) -> serde_json::Value {
    serde_json::Value::from(days.to_vec())
}

/// Group list row with its member count.
#[derive(Debug, Clone)]
pub struct GroupListItem {
    pub group: Group,
    pub student_count: usize,
}

impl GroupListItem {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.group.id,
            name: self.group.name,
            course: self.group.course_id,
            teacher: self.group.teacher_id,
            days: self.group.days,
            time: self.group.time,
            student_count: self.student_count,
        }
    }
}

/// A group with course, teacher and members resolved.
#[derive(Debug, Clone)]
pub struct GroupDetail {
    pub group: Group,
    pub course: Course,
    pub teacher: Teacher,
    pub students: Vec<StudentSummary>,
}

impl GroupDetail {
    pub fn into_dto(self) -> GroupDetailDto {
        GroupDetailDto {
            id: self.group.id,
            name: self.group.name,
            days: self.group.days,
            time: self.group.time,
            course: self.course.into_dto(),
            teacher: self.teacher.into_dto(),
            students: self.students.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub course_id: i32,
    pub teacher_id: i32,
    pub student_ids: Vec<i32>,
    pub days: Vec<String>,
    pub time: Option<String>,
}

impl From<CreateGroupDto> for CreateGroupParams {
    fn from(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            course_id: dto.course,
            teacher_id: dto.teacher,
            student_ids: dto.students,
            days: dto.days,
            time: dto.time,
        }
    }
}

/// Fields to change on a group. `student_ids`, when present, replaces the membership.
#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub name: Option<String>,
    pub course_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub student_ids: Option<Vec<i32>>,
    pub days: Option<Vec<String>>,
    pub time: Option<String>,
}

impl UpdateGroupParams {
    pub fn from_dto(id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            id,
            name: dto.name,
            course_id: dto.course,
            teacher_id: dto.teacher,
            student_ids: dto.students,
            days: dto.days,
            time: dto.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn days_ignore_non_string_entries() {
        assert_eq!(
            days_from_json(&json!(["Tue", 3, null, "Thu"])),
            vec!["Tue".to_string(), "Thu".to_string()]
        );
    }

    #[test]
    fn days_default_to_empty_for_non_array() {
        assert!(days_from_json(&json!("Mon")).is_empty());
    }

    #[test]
    fn converts_fixture_entity() {
        let group = Group::from_entity(test_utils::fixture::class_group_entity());

        assert_eq!(group.days, vec!["Mon", "Wed", "Fri"]);
        assert_eq!(group.time.as_deref(), Some("18:00"));
    }
}
