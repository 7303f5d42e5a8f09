//! Transaction domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::transaction::{
        AdminCreditDto, SubmitTransactionDto, SubmittedTransactionDto, TransactionDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        util::{
            parse::{parse_credit_amount, parse_payment_amount},
            time::format_timestamp,
        },
    },
};

/// Payment method recorded for credits applied by an administrator.
pub const ADMIN_PAYMENT_METHOD: &str = "admin_update";

/// Description recorded for credits applied by an administrator.
pub const ADMIN_CREDIT_DESCRIPTION: &str = "Fee payment updated by admin";

/// Lifecycle of a payment record.
///
/// Student submissions start as `Pending` and admin credits are written as
/// `Completed`. Nothing moves a record between states yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(InternalError::UnknownStatus {
                kind: "transaction",
                value: other.to_string(),
            }),
        }
    }
}

/// Recorded payment owned by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub student_id: i32,
    pub amount: f64,
    pub payment_method: String,
    /// System generated UUID v4, unique across all transactions.
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

impl Transaction {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known `TransactionStatus`
    pub fn from_entity(entity: entity::transaction::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<TransactionStatus>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            amount: entity.amount,
            payment_method: entity.payment_method,
            transaction_id: entity.transaction_id,
            status,
            created_at: entity.created_at,
            description: entity.description,
        })
    }

    /// Full listing projection.
    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            amount: self.amount,
            payment_method: self.payment_method,
            transaction_id: self.transaction_id,
            status: self.status.to_string(),
            created_at: format_timestamp(&self.created_at),
            description: self.description,
        }
    }

    /// Summary returned right after a submission.
    pub fn into_submitted_dto(self) -> SubmittedTransactionDto {
        SubmittedTransactionDto {
            id: self.id,
            transaction_id: self.transaction_id,
            amount: self.amount,
            payment_method: self.payment_method,
            status: self.status.to_string(),
        }
    }
}

/// Row to insert. The transaction id is generated by the repository.
#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub student_id: i32,
    pub amount: f64,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub description: String,
}

/// Validated student payment submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTransactionParam {
    pub amount: f64,
    pub payment_method: String,
    pub description: String,
}

impl TryFrom<SubmitTransactionDto> for SubmitTransactionParam {
    type Error = AppError;

    fn try_from(dto: SubmitTransactionDto) -> Result<Self, Self::Error> {
        let payment_method = dto
            .payment_method
            .filter(|method| !method.trim().is_empty())
            .ok_or_else(|| {
                AppError::BadRequest("Amount and payment method are required".to_string())
            })?;

        let amount = parse_payment_amount(dto.amount.as_ref())?;

        Ok(Self {
            amount,
            payment_method,
            description: dto.description.unwrap_or_default(),
        })
    }
}

impl SubmitTransactionParam {
    pub fn into_create_param(self, student_id: i32) -> CreateTransactionParam {
        CreateTransactionParam {
            student_id,
            amount: self.amount,
            payment_method: self.payment_method,
            status: TransactionStatus::Pending,
            description: self.description,
        }
    }
}

/// Validated manual credit applied by an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCreditParam {
    pub student_id: i32,
    /// Non-zero; negative values reverse an earlier credit.
    pub amount: f64,
}

impl AdminCreditParam {
    pub fn from_dto(student_id: i32, dto: AdminCreditDto) -> Result<Self, AppError> {
        let amount = parse_credit_amount(dto.amount.as_ref())?;

        Ok(Self { student_id, amount })
    }

    pub fn to_create_param(&self) -> CreateTransactionParam {
        CreateTransactionParam {
            student_id: self.student_id,
            amount: self.amount,
            payment_method: ADMIN_PAYMENT_METHOD.to_string(),
            status: TransactionStatus::Completed,
            description: ADMIN_CREDIT_DESCRIPTION.to_string(),
        }
    }
}
