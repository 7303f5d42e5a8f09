use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessMessageDto},
        student::{LoginDto, LoginResponseDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::student::LoginParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with roll number and password.
///
/// On success the session id is cycled and the student is bound to the session.
///
/// # Returns
/// - `200 OK` - Logged in, with the student's public projection and balance
/// - `400 Bad Request` - Missing roll number or password, or malformed body
/// - `401 Unauthorized` - Unknown roll number or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Roll number and password are required", body = ErrorDto),
        (status = 401, description = "Invalid roll number or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = LoginParam::try_from(payload)?;

    let student = AuthService::new(&state.db).login(param).await?;

    AuthSession::new(&session).login(student.id).await?;

    Ok(Json(LoginResponseDto {
        success: true,
        message: "Login successful".to_string(),
        student: student.into_dto(),
    }))
}

/// Log out and destroy the session.
///
/// # Returns
/// - `200 OK` - Logged out
/// - `401 Unauthorized` - No student logged in
#[utoipa::path(
    get,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out successfully", body = SuccessMessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(student_id) = auth_session.get_student_id().await? else {
        return Err(AuthError::Unauthenticated.into());
    };

    auth_session.logout().await?;

    tracing::info!("Student {} logged out", student_id);

    Ok(Json(SuccessMessageDto::new("Logged out successfully")))
}
