//! Student fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::student;

/// Default test student first name.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default test student last name.
pub const DEFAULT_LAST_NAME: &str = "Student";

/// Default test student phone number.
pub const DEFAULT_PHONE: &str = "+998901234567";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Student"`
/// - phone: `"+998901234567"`
/// - info: `None`
/// - created_at: `2026-01-01T00:00:00Z`
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    name_first: String,
    name_last: String,
    phone: String,
    info: Option<String>,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name_first: DEFAULT_FIRST_NAME.to_string(),
            name_last: DEFAULT_LAST_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            info: None,
        }
    }
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.name_first = first.into();
        self.name_last = last.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn info(mut self, info: Option<String>) -> Self {
        self.info = info;
        self
    }

    /// Builds the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            name_first: self.name_first,
            name_last: self.name_last,
            phone: self.phone,
            info: self.info,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}
