use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{student::StudentSummaryDto, teacher::TeacherDto};

#[derive(Serialize, Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQueryDto {
    /// Free text matched against first name, last name and phone.
    #[serde(default)]
    pub search: Option<String>,
}

/// Search hits keyed by entity type, best match first.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SearchResultsDto {
    pub students: Vec<StudentSummaryDto>,
    pub teachers: Vec<TeacherDto>,
}
