use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{admin, auth, complaint, page, student, transaction},
    error::handler404,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Fee Portal",
        description = "Student fee balances, payment records and complaints"
    ),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "student", description = "Student profile, balance and public search"),
        (name = "transaction", description = "Payment transactions"),
        (name = "complaint", description = "Student complaints"),
        (name = "admin", description = "Database bootstrap and manual fee credits")
    )
)]
pub struct ApiDoc;

/// JSON endpoints, registered with their OpenAPI operations.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(student::get_profile))
        .routes(routes!(student::get_balance))
        .routes(routes!(student::search_student))
        .routes(routes!(
            transaction::get_transactions,
            transaction::submit_transaction
        ))
        .routes(routes!(
            complaint::get_complaints,
            complaint::submit_complaint
        ))
        .routes(routes!(admin::init_db))
        .routes(routes!(admin::update_fee))
}

/// Builds the application router.
///
/// The OpenAPI document served at `/api/openapi.json` is generated from the JSON
/// route registrations.
pub fn router() -> Router<AppState> {
    let (api_router, api) = api_router().split_for_parts();

    api_router
        .route("/", get(page::main_page))
        .route("/studentlogin", get(page::login_page))
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .fallback(handler404)
}
