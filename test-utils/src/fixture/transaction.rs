//! Transaction fixtures for in-memory test data.

use chrono::{TimeZone, Utc};
use entity::transaction;

pub const DEFAULT_TRANSACTION_ID: &str = "6f1c2a8e-3d4b-4c5e-9f60-7a8b9c0d1e2f";

/// Creates a pending transaction entity model owned by student `1`.
///
/// created_at is `2024-02-01 14:05:09 UTC`.
pub fn entity() -> transaction::Model {
    transaction::Model {
        id: 1,
        student_id: 1,
        amount: 5000.0,
        payment_method: "card".to_string(),
        transaction_id: DEFAULT_TRANSACTION_ID.to_string(),
        status: "pending".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 2, 1, 14, 5, 9).unwrap(),
        description: "Semester fee".to_string(),
    }
}

/// Creates the default transaction entity with a custom status string.
pub fn entity_with_status(status: &str) -> transaction::Model {
    transaction::Model {
        status: status.to_string(),
        ..entity()
    }
}
