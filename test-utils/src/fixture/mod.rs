//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and supply the default
//! values used by the factories. Unlike factories, fixtures do NOT insert into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//! let custom = fixture::student::entity_builder().phone("+998900000000").build();
//! ```

pub mod class_group;
pub mod course;
pub mod student;
pub mod teacher;

pub use class_group::entity as class_group_entity;
pub use course::entity as course_entity;
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
pub use teacher::entity as teacher_entity;
