use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        student::{BalanceResponseDto, ProfileResponseDto, SearchResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Get the profile of the logged in student.
///
/// # Returns
/// - `200 OK` - Full profile including email and balance
/// - `401 Unauthorized` - No student logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/student/profile",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Student profile", body = ProfileResponseDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(ProfileResponseDto {
        success: true,
        student: student.into_profile_dto(),
    }))
}

/// Get the fee balance of the logged in student.
///
/// # Returns
/// - `200 OK` - Balance, total fee and paid fee
/// - `401 Unauthorized` - No student logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/student/balance",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Fee balance", body = BalanceResponseDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(student.fee_balance().into_dto()))
}

/// Look up a student's public details by roll number.
///
/// No authentication. Fee amounts and credentials are never included.
///
/// # Returns
/// - `200 OK` - Name, roll number, department and year
/// - `404 Not Found` - No student with that roll number
#[utoipa::path(
    get,
    path = "/api/search/student/{roll_number}",
    tag = STUDENT_TAG,
    params(
        ("roll_number" = String, Path, description = "Exact roll number")
    ),
    responses(
        (status = 200, description = "Public student details", body = SearchResponseDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_student(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .search_public(&roll_number)
        .await?;

    Ok(Json(SearchResponseDto {
        success: true,
        student: student.into_dto(),
    }))
}
