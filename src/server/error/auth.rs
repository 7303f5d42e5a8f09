use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No student id in the session, or the id no longer resolves to a student.
    #[error("Request is not authenticated")]
    Unauthenticated,

    /// Unknown roll number or wrong password. The two cases are deliberately
    /// indistinguishable to the client.
    #[error("Invalid credentials for roll number '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into 401 responses.
///
/// The roll number carried by `InvalidCredentials` is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::Unauthenticated => "Authentication required",
            Self::InvalidCredentials(_) => "Invalid roll number or password",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
