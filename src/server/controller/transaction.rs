use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        transaction::{SubmitTransactionDto, SubmitTransactionResponseDto, TransactionListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::transaction::SubmitTransactionParam, service::ledger::LedgerService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

/// List the logged in student's transactions, newest first.
///
/// # Returns
/// - `200 OK` - Transactions of the student
/// - `401 Unauthorized` - No student logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    responses(
        (status = 200, description = "Transactions, newest first", body = TransactionListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    let transactions = LedgerService::new(&state.db)
        .list_transactions(student.id)
        .await?;

    Ok(Json(TransactionListDto {
        success: true,
        transactions: transactions.into_iter().map(|t| t.into_dto()).collect(),
    }))
}

/// Report a payment made by the logged in student.
///
/// The payment is recorded as `pending` and does not change the paid fee.
///
/// # Returns
/// - `200 OK` - Transaction recorded
/// - `400 Bad Request` - Missing or invalid amount or payment method
/// - `401 Unauthorized` - No student logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = SubmitTransactionDto,
    responses(
        (status = 200, description = "Transaction submitted", body = SubmitTransactionResponseDto),
        (status = 400, description = "Invalid amount or payment method", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_transaction(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SubmitTransactionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    let Json(payload) = payload?;
    let param = SubmitTransactionParam::try_from(payload)?;

    let transaction = LedgerService::new(&state.db)
        .submit_transaction(student.id, param)
        .await?;

    Ok(Json(SubmitTransactionResponseDto {
        success: true,
        message: "Transaction submitted successfully".to_string(),
        transaction: transaction.into_submitted_dto(),
    }))
}
