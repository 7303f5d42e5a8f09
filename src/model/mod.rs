//! Data transfer objects exchanged over the HTTP API.
//!
//! Request DTOs deserialize the JSON bodies clients send (camelCase where the
//! browser client expects it); response DTOs define the exact JSON shapes returned.
//! Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod complaint;
pub mod student;
pub mod transaction;
