//! Business logic layer.
//!
//! Services sit between controllers and repositories. They take validated
//! parameter types, orchestrate repository calls (inside a database transaction
//! where an operation touches more than one row) and return domain models.

pub mod admin;
pub mod auth;
pub mod complaint;
pub mod ledger;
pub mod student;

#[cfg(test)]
mod test;
