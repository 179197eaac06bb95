//! Server-side API backend.
//!
//! This module contains the backend of the education center: HTTP endpoints, business
//! logic and data access for students, payments, teachers, courses and groups. Axum
//! serves the API and SeaORM talks to the database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Operation orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations returning domain models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and CORS setup
//! - **Router** (`router`) - Axum route configuration
//! - **Util** (`util/`) - Path id parsing and fuzzy text matching
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and dispatches to a controller
//! 2. **Controller** parses path, query and body, calls a service
//! 3. **Service** runs one or more repository queries and assembles a domain model
//! 4. **Data** queries the database and converts entity models to domain models
//! 5. **Controller** converts the domain model to a DTO and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
