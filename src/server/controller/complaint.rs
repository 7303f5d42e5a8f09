use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        complaint::{ComplaintListDto, SubmitComplaintDto, SubmitComplaintResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::complaint::SubmitComplaintParam,
        service::complaint::ComplaintService, state::AppState,
    },
};

/// Tag for grouping complaint endpoints in OpenAPI documentation
pub static COMPLAINT_TAG: &str = "complaint";

/// List the logged in student's complaints, newest first.
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = COMPLAINT_TAG,
    responses(
        (status = 200, description = "Complaints, newest first", body = ComplaintListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_complaints(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    let complaints = ComplaintService::new(&state.db).list(student.id).await?;

    Ok(Json(ComplaintListDto {
        success: true,
        complaints: complaints.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

/// File a complaint as the logged in student.
///
/// # Returns
/// - `200 OK` - Complaint filed with status `open`
/// - `400 Bad Request` - Missing subject or message
/// - `401 Unauthorized` - No student logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = COMPLAINT_TAG,
    request_body = SubmitComplaintDto,
    responses(
        (status = 200, description = "Complaint submitted", body = SubmitComplaintResponseDto),
        (status = 400, description = "Subject and message are required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_complaint(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SubmitComplaintDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &session).require().await?;

    let Json(payload) = payload?;
    let param = SubmitComplaintParam::try_from(payload)?;

    let complaint = ComplaintService::new(&state.db)
        .submit(student.id, param)
        .await?;

    Ok(Json(SubmitComplaintResponseDto {
        success: true,
        message: "Complaint submitted successfully".to_string(),
        complaint: complaint.into_submitted_dto(),
    }))
}
