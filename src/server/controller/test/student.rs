use super::*;
use crate::server::controller::student::{get_balance, get_profile, search_student};
use test_utils::factory::student::StudentFactory;

/// Tests the profile of the logged in student.
///
/// Expected: 200 with email and computed balance
#[tokio::test]
async fn profile_includes_email_and_balance() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = StudentFactory::new(db)
        .email("jane.smith@vemu.edu")
        .fees(60000.0, 45000.0)
        .build()
        .await?;
    AuthSession::new(session).login(student.id).await?;

    let response = get_profile(State(AppState::new(db.clone())), session.clone())
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["email"], json!("jane.smith@vemu.edu"));
    assert_eq!(body["student"]["balance"], json!(15000.0));
    assert!(body["student"].get("password_hash").is_none());

    Ok(())
}

/// Tests the profile without a login.
///
/// Expected: 401
#[tokio::test]
async fn profile_requires_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = get_profile(State(AppState::new(db.clone())), session.clone())
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));

    Ok(())
}

/// Tests the balance endpoint.
///
/// Expected: 200 with balance, total_fee and paid_fee
#[tokio::test]
async fn balance_reports_fee_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = StudentFactory::new(db).fees(40000.0, 20000.0).build().await?;
    AuthSession::new(session).login(student.id).await?;

    let response = get_balance(State(AppState::new(db.clone())), session.clone())
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "balance": 20000.0,
            "total_fee": 40000.0,
            "paid_fee": 20000.0
        })
    );

    Ok(())
}

/// Tests that public search exposes no fee or credential fields.
///
/// Expected: 200 with exactly name, roll_number, department and year
#[tokio::test]
async fn search_returns_only_public_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db)
        .roll_number("2021003")
        .name("Mike Johnson")
        .build()
        .await?;

    let response = search_student(
        State(AppState::new(db.clone())),
        Path("2021003".to_string()),
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let student = body["student"].as_object().unwrap();
    let mut keys: Vec<&str> = student.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["department", "name", "roll_number", "year"]);
    assert_eq!(student["name"], json!("Mike Johnson"));

    Ok(())
}

/// Tests public search for an unknown roll number.
///
/// Expected: 404
#[tokio::test]
async fn search_unknown_student_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = search_student(
        State(AppState::new(db.clone())),
        Path("0000000".to_string()),
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Student not found"));

    Ok(())
}
