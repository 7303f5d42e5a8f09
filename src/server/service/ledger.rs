//! Fee ledger.
//!
//! Student submissions are recorded as `pending` and leave `paid_fee` alone.
//! Only an administrator credit changes `paid_fee`, and it does so together with
//! inserting a `completed` record inside one database transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{student::StudentRepository, transaction::TransactionRepository},
    error::AppError,
    model::transaction::{AdminCreditParam, SubmitTransactionParam, Transaction},
};

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment reported by a student as `pending`.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The recorded transaction with its generated id
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn submit_transaction(
        &self,
        student_id: i32,
        param: SubmitTransactionParam,
    ) -> Result<Transaction, AppError> {
        let transaction = TransactionRepository::new(self.db)
            .create(param.into_create_param(student_id))
            .await?;

        tracing::info!(
            "Student {} submitted transaction {} of {}",
            student_id,
            transaction.transaction_id,
            transaction.amount
        );

        Ok(transaction)
    }

    /// Credits a student's paid fee and records the credit.
    ///
    /// Both writes happen in one database transaction. If either fails, or the
    /// student does not exist, the transaction is dropped uncommitted and rolled
    /// back.
    ///
    /// # Returns
    /// - `Ok(f64)` - The student's new balance
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AppError::DbErr)` - Either write or the commit failed
    pub async fn admin_credit(&self, param: AdminCreditParam) -> Result<f64, AppError> {
        let txn = self.db.begin().await?;

        let Some(student) = StudentRepository::new(&txn)
            .add_paid_fee(param.student_id, param.amount)
            .await?
        else {
            return Err(AppError::NotFound("Student not found".to_string()));
        };

        let transaction = TransactionRepository::new(&txn)
            .create(param.to_create_param())
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Admin credited {} to student {} (transaction {})",
            param.amount,
            student.roll_number,
            transaction.transaction_id
        );

        Ok(student.balance())
    }

    /// Gets a student's transactions, newest first.
    pub async fn list_transactions(&self, student_id: i32) -> Result<Vec<Transaction>, AppError> {
        let transactions = TransactionRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        Ok(transactions)
    }
}
