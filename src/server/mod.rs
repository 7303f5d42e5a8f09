//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM on SQLite for persistence
//! and tower-sessions for cookie sessions stored in the same database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and database transactions
//! - **Data Layer** (`data/`) - Repositories converting entity models to domain models
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations and session layer
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** validates the DTO into a param and resolves the session through `AuthGuard`
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the domain model to a DTO and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
