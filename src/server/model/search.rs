use crate::{
    model::search::SearchResultsDto,
    server::model::{student::StudentSummary, teacher::Teacher},
};

/// Search hits keyed by entity type, best match first.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub students: Vec<StudentSummary>,
    pub teachers: Vec<Teacher>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            students: self
                .students
                .into_iter()
                .map(StudentSummary::into_dto)
                .collect(),
            teachers: self.teachers.into_iter().map(Teacher::into_dto).collect(),
        }
    }
}
