use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// First and last name of a student or teacher.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct PersonNameDto {
    pub first: String,
    #[serde(default)]
    pub last: String,
}
