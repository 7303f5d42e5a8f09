//! Transaction data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::transaction::{CreateTransactionParam, Transaction};

/// Repository for payment transaction records.
pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a transaction with a freshly generated UUID v4 transaction id.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The inserted transaction
    /// - `Err(DbErr)` - Insert failed or the owning student does not exist
    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, DbErr> {
        let entity = entity::prelude::Transaction::insert(entity::transaction::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            amount: ActiveValue::Set(param.amount),
            payment_method: ActiveValue::Set(param.payment_method),
            transaction_id: ActiveValue::Set(Uuid::new_v4().to_string()),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Transaction::from_entity(entity)
    }

    /// Gets every transaction owned by a student, newest first.
    ///
    /// Rows created within the same instant are ordered by id descending.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Transaction>, DbErr> {
        entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::StudentId.eq(student_id))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Transaction::from_entity)
            .collect()
    }
}
