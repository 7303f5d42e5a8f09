//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! into DTOs at the controller boundary. Parameter types carry already validated
//! input from controllers into services.

pub mod complaint;
pub mod student;
pub mod transaction;
