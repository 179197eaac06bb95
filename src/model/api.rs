use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement returned by commands that have no resource to return.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
    pub message: String,
}

impl SuccessDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
