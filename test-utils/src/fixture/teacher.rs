//! Teacher fixtures for creating in-memory test data.

use entity::teacher;

/// Default test teacher first name.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default test teacher last name.
pub const DEFAULT_LAST_NAME: &str = "Teacher";

/// Default test teacher phone number.
pub const DEFAULT_PHONE: &str = "+998907654321";

/// Creates a teacher entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Teacher"`
/// - phone: `"+998907654321"`
pub fn entity() -> teacher::Model {
    teacher::Model {
        id: 1,
        name_first: DEFAULT_FIRST_NAME.to_string(),
        name_last: DEFAULT_LAST_NAME.to_string(),
        phone: DEFAULT_PHONE.to_string(),
    }
}
