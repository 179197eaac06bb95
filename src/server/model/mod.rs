//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry the input of write operations
//! from controllers into services.

pub mod course;
pub mod group;
pub mod payment;
pub mod person;
pub mod search;
pub mod student;
pub mod teacher;
