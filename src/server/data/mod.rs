//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity of the center. Repositories use SeaORM entity models internally and return domain
//! models so the service layer never sees SeaORM types. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod course;
pub mod group;
pub mod payment;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
