//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Use fixtures to unit test conversions and business rules that operate on
//! already-loaded models. Factories in `crate::factory` are the inserting
//! counterpart.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//! let overpaid = fixture::student::entity_with_fees(40000.0, 45000.0);
//! ```

pub mod complaint;
pub mod student;
pub mod transaction;
