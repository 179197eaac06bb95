//! Group fixtures for creating in-memory test data.

use entity::class_group;

/// Default test group name.
pub const DEFAULT_NAME: &str = "Test Group";

/// Default weekdays the group meets on.
pub const DEFAULT_DAYS: [&str; 3] = ["Mon", "Wed", "Fri"];

/// Default start time of a lesson.
pub const DEFAULT_TIME: &str = "18:00";

/// Creates a group entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Group"`
/// - course_id: `1`
/// - teacher_id: `1`
/// - days: `["Mon", "Wed", "Fri"]`
/// - time: `Some("18:00")`
pub fn entity() -> class_group::Model {
    class_group::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        course_id: 1,
        teacher_id: 1,
        days: default_days(),
        time: Some(DEFAULT_TIME.to_string()),
    }
}

/// Default days as the JSON value stored in the `days` column.
pub fn default_days() -> serde_json::Value {
    serde_json::json!(DEFAULT_DAYS)
}
