use crate::model::person::PersonNameDto;

/// First and last name of a person, stored as two columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn into_dto(self) -> PersonNameDto {
        PersonNameDto {
            first: self.first,
            last: self.last,
        }
    }
}

impl From<PersonNameDto> for PersonName {
    fn from(dto: PersonNameDto) -> Self {
        Self {
            first: dto.first,
            last: dto.last,
        }
    }
}
