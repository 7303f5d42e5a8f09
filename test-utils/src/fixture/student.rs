//! Student fixtures for in-memory test data.

use chrono::{TimeZone, Utc};
use entity::student;

pub const DEFAULT_ROLL_NUMBER: &str = "2021001";
pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_EMAIL: &str = "john.doe@vemu.edu";
pub const DEFAULT_DEPARTMENT: &str = "Computer Science";
pub const DEFAULT_TOTAL_FEE: f64 = 50000.0;
pub const DEFAULT_PAID_FEE: f64 = 30000.0;

/// Placeholder credential; fixtures never need to verify a password.
pub const DEFAULT_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - roll_number: `"2021001"`, name: `"John Doe"`
/// - department: `"Computer Science"`, year: `2`
/// - total_fee: `50000.0`, paid_fee: `30000.0`
/// - created_at: `2024-01-15 09:30:00 UTC`
pub fn entity() -> student::Model {
    student::Model {
        id: 1,
        roll_number: DEFAULT_ROLL_NUMBER.to_string(),
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password_hash: DEFAULT_PASSWORD_HASH.to_string(),
        department: DEFAULT_DEPARTMENT.to_string(),
        year: 2,
        total_fee: DEFAULT_TOTAL_FEE,
        paid_fee: DEFAULT_PAID_FEE,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

/// Creates a default student entity with custom fee amounts.
pub fn entity_with_fees(total_fee: f64, paid_fee: f64) -> student::Model {
    student::Model {
        total_fee,
        paid_fee,
        ..entity()
    }
}
