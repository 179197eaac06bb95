//! Education Center Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! edcenter service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, plus factories and fixtures for the center's entities.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: Build entity models in memory without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_center_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let student = factory::create_student(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
