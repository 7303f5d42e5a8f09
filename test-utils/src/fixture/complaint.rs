//! Complaint fixtures for in-memory test data.

use chrono::{TimeZone, Utc};
use entity::complaint;

/// Creates an open complaint entity model owned by student `1`.
///
/// created_at is `2024-03-10 08:00:00 UTC`, resolved_at is `None`.
pub fn entity() -> complaint::Model {
    complaint::Model {
        id: 1,
        student_id: 1,
        subject: "Wifi down".to_string(),
        message: "No connectivity in the library since Monday".to_string(),
        status: "open".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
        resolved_at: None,
    }
}

/// Creates a resolved complaint resolved at `2024-03-12 17:45:30 UTC`.
pub fn resolved_entity() -> complaint::Model {
    complaint::Model {
        status: "resolved".to_string(),
        resolved_at: Some(Utc.with_ymd_and_hms(2024, 3, 12, 17, 45, 30).unwrap()),
        ..entity()
    }
}
