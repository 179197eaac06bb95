use crate::{
    model::teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    server::model::person::PersonName,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    pub name: PersonName,
    pub phone: String,
}

impl Teacher {
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            name: PersonName::new(entity.name_first, entity.name_last),
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            name: self.name.into_dto(),
            phone: self.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub name: PersonName,
    pub phone: String,
}

impl From<CreateTeacherDto> for CreateTeacherParams {
    fn from(dto: CreateTeacherDto) -> Self {
        Self {
            name: dto.name.into(),
            phone: dto.phone,
        }
    }
}

/// Fields to change on a teacher; `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateTeacherParams {
    pub id: i32,
    pub name: Option<PersonName>,
    pub phone: Option<String>,
}

impl UpdateTeacherParams {
    pub fn from_dto(id: i32, dto: UpdateTeacherDto) -> Self {
        Self {
            id,
            name: dto.name.map(Into::into),
            phone: dto.phone,
        }
    }
}
