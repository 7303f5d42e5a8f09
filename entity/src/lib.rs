//! SeaORM entities for the fee portal schema.
//!
//! Table layout is owned by the `migration` crate; these models mirror it column
//! for column so that `Schema::create_table_from_entity` produces an equivalent
//! schema for in-memory test databases.

pub mod complaint;
pub mod prelude;
pub mod student;
pub mod transaction;
