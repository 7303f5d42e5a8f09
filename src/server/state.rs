//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every handler through Axum's `State` extractor.
///
/// Cloned per request; `DatabaseConnection` is a pool handle, so clones share
/// the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
