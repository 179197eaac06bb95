use crate::server::error::AppError;

/// Parses a record id from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a valid id
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|e| AppError::BadRequest(format!("Invalid id '{}': {}", value, e)))
}
