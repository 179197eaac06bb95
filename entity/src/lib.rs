//! SeaORM entity models for the education center database.
//!
//! One module per table. `prelude` re-exports every `Entity` under its table-derived name
//! so callers can write `entity::prelude::Student::find()`.

pub mod class_group;
pub mod course;
pub mod group_student;
pub mod payment;
pub mod prelude;
pub mod student;
pub mod teacher;
