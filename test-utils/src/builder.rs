use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entities rather than the migrations so each
/// test can pick exactly the tables it needs. Leaving a table out is also how tests
/// simulate a persistence failure part-way through an operation.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Student;
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the fee portal schema in dependency order:
    /// Student, Transaction, Complaint.
    pub fn with_fee_tables(self) -> Self {
        self.with_table(Student)
            .with_table(Transaction)
            .with_table(Complaint)
    }

    /// Builds the test context, creating an in-memory SQLite database and every
    /// configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
