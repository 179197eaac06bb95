//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Reference checks and the not-found policy of each operation
//! - **Orchestration**: Coordinating the repository calls that make up one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod course;
pub mod group;
pub mod search;
pub mod student;
pub mod teacher;
