//! Data transfer objects defining the JSON wire format.
//!
//! These types are what the HTTP API accepts and returns. Server-side domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod course;
pub mod group;
pub mod payment;
pub mod person;
pub mod search;
pub mod student;
pub mod teacher;
