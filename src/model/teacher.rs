use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::person::PersonNameDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherDto {
    pub id: i32,
    pub name: PersonNameDto,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeacherDto {
    pub name: PersonNameDto,
    #[serde(default)]
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTeacherDto {
    pub name: Option<PersonNameDto>,
    pub phone: Option<String>,
}
