//! Transaction factory for creating test transaction rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions owned by a student.
///
/// Defaults to a pending 1000.0 `upi` payment with a fresh UUID and the current time.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    amount: f64,
    payment_method: String,
    transaction_id: String,
    status: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl<'a> TransactionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            amount: 1000.0,
            payment_method: "upi".to_string(),
            transaction_id: uuid::Uuid::new_v4().to_string(),
            status: "pending".to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the transaction row.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            amount: ActiveValue::Set(self.amount),
            payment_method: ActiveValue::Set(self.payment_method),
            transaction_id: ActiveValue::Set(self.transaction_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending transaction with default values for the given student.
pub async fn create_transaction(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db, student_id).build().await
}
