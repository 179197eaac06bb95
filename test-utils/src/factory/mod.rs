//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//!
//! // Teacher, course and group with the student as member
//! let (teacher, course, group, student) =
//!     factory::helpers::create_student_in_group(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Aziz", "Karimov")
//!     .phone("+998901112233")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities
//! - `payment` - Create payment records for a student
//! - `teacher` - Create teacher entities
//! - `course` - Create course entities
//! - `class_group` - Create groups and their memberships
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod class_group;
pub mod course;
pub mod helpers;
pub mod payment;
pub mod student;
pub mod teacher;

pub use class_group::create_group;
pub use course::create_course;
pub use payment::create_payment;
pub use student::create_student;
pub use teacher::create_teacher;
