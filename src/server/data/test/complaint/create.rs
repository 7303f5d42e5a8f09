use super::*;

/// Tests inserting a complaint.
///
/// Expected: Ok with open status and no resolution timestamp
#[tokio::test]
async fn creates_open_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let complaint = ComplaintRepository::new(db)
        .create(CreateComplaintParam {
            student_id: student.id,
            subject: "Wifi down".to_string(),
            message: "No connectivity in hostel block B".to_string(),
            status: ComplaintStatus::Open,
        })
        .await?;

    assert_eq!(complaint.subject, "Wifi down");
    assert_eq!(complaint.status, ComplaintStatus::Open);
    assert!(complaint.resolved_at.is_none());

    Ok(())
}
