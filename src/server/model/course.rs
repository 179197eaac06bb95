use crate::model::course::{CourseDto, CreateCourseDto, UpdateCourseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
    pub price: f64,
}

impl From<CreateCourseDto> for CreateCourseParams {
    fn from(dto: CreateCourseDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateCourseParams {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            name: dto.name,
            price: dto.price,
        }
    }
}
