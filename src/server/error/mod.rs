//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by controllers. It wraps the
//! domain-specific errors below and implements `IntoResponse`, so handlers can
//! propagate any failure with `?` and still produce a JSON error body.

pub mod auth;
pub mod config;
pub mod internal;

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` renders its
/// own 401 responses; every infrastructure failure becomes a generic 500 with the
/// detail logged server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, rendered as 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while migrating the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found, rendered as 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request, rendered as 400 with the given message.
    #[error("{0}")]
    BadRequest(String),
}

/// Malformed or non-JSON request bodies are client errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so that database or
/// session details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn handler404(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri);

    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Page not found")))
}

/// Renders a panic inside a handler as a 500 JSON error.
///
/// Any database transaction the handler held is rolled back when it is dropped
/// during unwinding.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
