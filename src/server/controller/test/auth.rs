use super::*;
use crate::{
    model::student::LoginDto,
    server::controller::auth::{login, logout},
};
use test_utils::factory::student::{StudentFactory, DEFAULT_PASSWORD};

fn credentials(roll_number: &str, password: &str) -> LoginDto {
    LoginDto {
        roll_number: Some(roll_number.to_string()),
        password: Some(password.to_string()),
    }
}

/// Tests a successful login.
///
/// Expected: 200 with the student projection and the student bound to the session
#[tokio::test]
async fn login_returns_student_and_binds_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = StudentFactory::new(db)
        .roll_number("2021001")
        .fees(50000.0, 30000.0)
        .build()
        .await?;

    let response = login(
        State(AppState::new(db.clone())),
        session.clone(),
        Ok(Json(credentials("2021001", DEFAULT_PASSWORD))),
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Login successful"));
    assert_eq!(body["student"]["balance"], json!(20000.0));
    assert!(body["student"].get("password_hash").is_none());

    assert_eq!(
        AuthSession::new(session).get_student_id().await?,
        Some(created.id)
    );

    Ok(())
}

/// Tests a login with a wrong password.
///
/// Expected: 401 and no student bound to the session
#[tokio::test]
async fn invalid_credentials_are_unauthorized() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_student_with_roll(db, "2021001").await?;

    let response = login(
        State(AppState::new(db.clone())),
        session.clone(),
        Ok(Json(credentials("2021001", "not-the-password"))),
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid roll number or password"));

    assert_eq!(AuthSession::new(session).get_student_id().await?, None);

    Ok(())
}

/// Tests a login body without a password.
///
/// Expected: 400
#[tokio::test]
async fn missing_password_is_bad_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = login(
        State(AppState::new(db.clone())),
        session.clone(),
        json_body::<LoginDto>(r#"{"rollNumber": "2021001"}"#).await,
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Roll number and password are required"));

    Ok(())
}

/// Tests a body that is not JSON.
///
/// Expected: 400 with the standard error shape
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = login(
        State(AppState::new(db.clone())),
        session.clone(),
        json_body::<LoginDto>("{rollNumber: 2021001").await,
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    Ok(())
}

/// Tests logging out without a login.
///
/// Expected: 401
#[tokio::test]
async fn logout_without_login_is_unauthorized() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let response = logout(session.clone()).await.into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Authentication required"));

    Ok(())
}

/// Tests logging out after a login.
///
/// Expected: 200 and the session no longer identifies the student
#[tokio::test]
async fn logout_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    AuthSession::new(session).login(1).await?;

    let response = logout(session.clone()).await.into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Logged out successfully"));
    assert_eq!(AuthSession::new(session).get_student_id().await?, None);

    Ok(())
}
