use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    course::CourseDto,
    payment::{CreatePaymentDto, PaymentDto},
    person::PersonNameDto,
    teacher::TeacherDto,
};

/// Row of the student list: the student flattened with its group and teacher names.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentListItemDto {
    pub id: i32,
    pub name: PersonNameDto,
    pub phone: String,
    /// Name of the student's group, absent when unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Name of the group's teacher, absent when unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<PersonNameDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentSummaryDto {
    pub id: i32,
    pub name: PersonNameDto,
    pub phone: String,
}

/// A stored student as returned by create and edit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub name: PersonNameDto,
    pub phone: String,
    pub info: Option<String>,
    pub payment_history: Vec<PaymentDto>,
}

/// The group block of a student's detail view. `course` and `teacher` are ids.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentGroupDto {
    pub id: i32,
    pub name: String,
    pub course: i32,
    pub teacher: i32,
    pub days: Vec<String>,
    pub time: Option<String>,
}

/// Detail view of one student.
///
/// Every field is optional so that an unknown id serializes as `{}`. A student without
/// a group has no `group`, `teacher` or `course`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonNameDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Most recent payment first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<Vec<PaymentDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<StudentGroupDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<TeacherDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub name: PersonNameDto,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub payment_history: Vec<CreatePaymentDto>,
}

/// Partial student update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<PersonNameDto>,
    pub phone: Option<String>,
    pub info: Option<String>,
}
