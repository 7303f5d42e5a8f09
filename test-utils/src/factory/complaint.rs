//! Complaint factory for creating test complaint rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test complaints owned by a student.
///
/// Defaults to an `open` complaint with a numbered subject and the current time.
pub struct ComplaintFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    subject: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
}

impl<'a> ComplaintFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            subject: format!("Complaint {}", id),
            message: format!("Details for complaint {}", id),
            status: "open".to_string(),
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the status and, for `resolved`, the resolution time.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        if self.status == "resolved" {
            self.resolved_at = Some(Utc::now());
        }
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the complaint row.
    pub async fn build(self) -> Result<entity::complaint::Model, DbErr> {
        entity::complaint::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            resolved_at: ActiveValue::Set(self.resolved_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open complaint with default values for the given student.
pub async fn create_complaint(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::complaint::Model, DbErr> {
    ComplaintFactory::new(db, student_id).build().await
}
