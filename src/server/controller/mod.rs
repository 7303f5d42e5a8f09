//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameters,
//! enforce authentication through `AuthGuard`, call a service and convert the
//! result back into a response DTO.

pub mod admin;
pub mod auth;
pub mod complaint;
pub mod page;
pub mod student;
pub mod transaction;

#[cfg(test)]
mod test;
