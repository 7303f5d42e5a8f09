//! Fee Portal Test Utils
//!
//! Shared testing utilities for the fee portal. Provides a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert realistic rows, and
//! fixtures that build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_transactions() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_fee_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::create_student(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
