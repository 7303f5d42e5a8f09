use super::*;

/// Tests that listings are newest first.
///
/// Expected: complaints ordered by created_at descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _, created) = factory::helpers::create_student_with_history(db, 3).await?;

    let complaints = ComplaintRepository::new(db)
        .get_by_student(student.id)
        .await?;

    let ids: Vec<i32> = complaints.iter().map(|c| c.id).collect();
    let expected: Vec<i32> = created.iter().rev().map(|c| c.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that another student's complaints are never returned.
///
/// Expected: empty list for a student without complaints
#[tokio::test]
async fn excludes_other_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    factory::create_complaint(db, other.id).await?;

    let complaints = ComplaintRepository::new(db)
        .get_by_student(student.id)
        .await?;

    assert!(complaints.is_empty());

    Ok(())
}
