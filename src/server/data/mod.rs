//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models,
//! keeping entity models inside the data layer. They are generic over
//! `ConnectionTrait` so the same methods run on the pool or inside a database
//! transaction.

pub mod complaint;
pub mod student;
pub mod transaction;

#[cfg(test)]
mod test;
