use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{course::CourseDto, student::StudentSummaryDto, teacher::TeacherDto};

/// Group row in the group list. `course` and `teacher` are ids.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub course: i32,
    pub teacher: i32,
    pub days: Vec<String>,
    pub time: Option<String>,
    pub student_count: usize,
}

/// A group with its course, teacher and members resolved.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupDetailDto {
    pub id: i32,
    pub name: String,
    pub days: Vec<String>,
    pub time: Option<String>,
    pub course: CourseDto,
    pub teacher: TeacherDto,
    pub students: Vec<StudentSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    /// Course id
    pub course: i32,
    /// Teacher id
    pub teacher: i32,
    #[serde(default)]
    pub students: Vec<i32>,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Partial group update. A present `students` list replaces the whole membership.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateGroupDto {
    pub name: Option<String>,
    pub course: Option<i32>,
    pub teacher: Option<i32>,
    pub students: Option<Vec<i32>>,
    pub days: Option<Vec<String>>,
    pub time: Option<String>,
}
