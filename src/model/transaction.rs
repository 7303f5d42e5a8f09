use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment submitted by a student.
///
/// `amount` is kept as raw JSON so both `5000` and `"5000"` are accepted and a
/// non-numeric value can be reported as a validation error.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SubmitTransactionDto {
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<serde_json::Value>,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub amount: f64,
    pub payment_method: String,
    pub transaction_id: String,
    pub status: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub created_at: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TransactionListDto {
    pub success: bool,
    pub transactions: Vec<TransactionDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SubmittedTransactionDto {
    pub id: i32,
    pub transaction_id: String,
    pub amount: f64,
    pub payment_method: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SubmitTransactionResponseDto {
    pub success: bool,
    pub message: String,
    pub transaction: SubmittedTransactionDto,
}

/// Manual fee credit posted by an administrator.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct AdminCreditDto {
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AdminCreditResponseDto {
    pub message: String,
    pub new_balance: f64,
}
