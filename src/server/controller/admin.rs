//! Administrative endpoints.
//!
//! These routes carry no authentication of their own and are meant to be exposed
//! only on trusted networks.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        transaction::{AdminCreditDto, AdminCreditResponseDto},
    },
    server::{
        error::AppError,
        model::transaction::AdminCreditParam,
        service::{
            admin::{AdminService, InitOutcome},
            ledger::LedgerService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Create missing tables and seed the sample students.
///
/// Safe to call repeatedly; seeding only happens on an empty student table.
///
/// # Returns
/// - `200 OK` - Initialized, or already initialized
/// - `500 Internal Server Error` - Migration or insert failed
#[utoipa::path(
    get,
    path = "/admin/init-db",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Database initialized or already initialized", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn init_db(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let message = match AdminService::new(&state.db).init_database().await? {
        InitOutcome::Initialized => "Database initialized successfully with sample data",
        InitOutcome::AlreadyInitialized => "Database already initialized",
    };

    Ok(Json(MessageDto {
        message: message.to_string(),
    }))
}

/// Credit an amount to a student's paid fee.
///
/// Also records a `completed` `admin_update` transaction. Negative amounts reverse
/// an earlier credit.
///
/// # Returns
/// - `200 OK` - Credit applied, with the student's new balance
/// - `400 Bad Request` - Missing, non-numeric or zero amount
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error, nothing applied
#[utoipa::path(
    post,
    path = "/admin/update-fee/{student_id}",
    tag = ADMIN_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id")
    ),
    request_body = AdminCreditDto,
    responses(
        (status = 200, description = "Fee updated successfully", body = AdminCreditResponseDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fee(
    State(state): State<AppState>,
    student_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AdminCreditDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A non-numeric id cannot name a student
    let Ok(Path(student_id)) = student_id else {
        return Err(AppError::NotFound("Student not found".to_string()));
    };

    let Json(payload) = payload?;
    let param = AdminCreditParam::from_dto(student_id, payload)?;

    let new_balance = LedgerService::new(&state.db).admin_credit(param).await?;

    Ok(Json(AdminCreditResponseDto {
        message: "Fee updated successfully".to_string(),
        new_balance,
    }))
}
