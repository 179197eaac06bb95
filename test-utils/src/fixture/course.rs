//! Course fixtures for creating in-memory test data.

use entity::course;

/// Default test course name.
pub const DEFAULT_NAME: &str = "General English";

/// Default test course price.
pub const DEFAULT_PRICE: f64 = 400_000.0;

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"General English"`
/// - price: `400000.0`
pub fn entity() -> course::Model {
    course::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        price: DEFAULT_PRICE,
    }
}
