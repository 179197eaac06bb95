//! HTTP handlers.
//!
//! Controllers parse path ids, query strings and JSON bodies, call one service method
//! and convert the resulting domain model into a DTO. Every handler returns
//! `Result<_, AppError>` so failures share one JSON error shape.

pub mod course;
pub mod docs;
pub mod group;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
