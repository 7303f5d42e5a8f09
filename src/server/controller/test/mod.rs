use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, middleware::session::AuthSession, state::AppState};

mod auth;
mod complaint;
mod student;

/// Splits a response into its status and JSON body.
async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Runs the `Json` extractor on a raw body, as Axum does for a request.
async fn json_body<T>(body: &str) -> Result<Json<T>, axum::extract::rejection::JsonRejection>
where
    T: serde::de::DeserializeOwned,
{
    let request = Request::builder()
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<T>::from_request(request, &()).await
}
