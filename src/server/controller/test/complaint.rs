use super::*;
use crate::{
    model::complaint::SubmitComplaintDto,
    server::controller::complaint::{get_complaints, submit_complaint},
};

/// Tests filing a complaint.
///
/// Expected: 200 with status open
#[tokio::test]
async fn submits_open_complaint() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session).login(student.id).await?;

    let response = submit_complaint(
        State(AppState::new(db.clone())),
        session.clone(),
        json_body::<SubmitComplaintDto>(r#"{"subject": "Wifi down", "message": "Hostel block B"}"#)
            .await,
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Complaint submitted successfully"));
    assert_eq!(body["complaint"]["subject"], json!("Wifi down"));
    assert_eq!(body["complaint"]["status"], json!("open"));

    Ok(())
}

/// Tests filing a complaint with a blank subject.
///
/// Expected: 400
#[tokio::test]
async fn blank_subject_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    AuthSession::new(session).login(student.id).await?;

    let response = submit_complaint(
        State(AppState::new(db.clone())),
        session.clone(),
        json_body::<SubmitComplaintDto>(r#"{"subject": "  ", "message": "Hostel block B"}"#).await,
    )
    .await
    .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Subject and message are required"));

    Ok(())
}

/// Tests listing complaints.
///
/// Expected: 200 with only the student's complaints and null resolved_at
#[tokio::test]
async fn lists_own_complaints() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    factory::create_complaint(db, student.id).await?;
    factory::create_complaint(db, other.id).await?;
    AuthSession::new(session).login(student.id).await?;

    let response = get_complaints(State(AppState::new(db.clone())), session.clone())
        .await
        .into_response();

    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let complaints = body["complaints"].as_array().unwrap();
    assert_eq!(complaints.len(), 1);
    assert_eq!(complaints[0]["resolved_at"], Value::Null);

    Ok(())
}

/// Tests listing complaints without a login.
///
/// Expected: 401
#[tokio::test]
async fn list_requires_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = get_complaints(State(AppState::new(db.clone())), session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
