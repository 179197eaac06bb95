use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    pub price: Option<f64>,
}
