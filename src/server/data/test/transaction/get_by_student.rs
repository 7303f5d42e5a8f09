use super::*;
use test_utils::factory::{helpers::seconds_ago, transaction::TransactionFactory};

/// Tests that listings are newest first.
///
/// Expected: transactions ordered by created_at descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, created, _) = factory::helpers::create_student_with_history(db, 3).await?;

    let transactions = TransactionRepository::new(db)
        .get_by_student(student.id)
        .await?;

    let ids: Vec<i32> = transactions.iter().map(|t| t.id).collect();
    let expected: Vec<i32> = created.iter().rev().map(|t| t.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests tie-breaking when two rows share a creation time.
///
/// Expected: the higher id comes first
#[tokio::test]
async fn breaks_ties_by_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let created_at = seconds_ago(30);
    let first = TransactionFactory::new(db, student.id)
        .created_at(created_at)
        .build()
        .await?;
    let second = TransactionFactory::new(db, student.id)
        .created_at(created_at)
        .build()
        .await?;

    let transactions = TransactionRepository::new(db)
        .get_by_student(student.id)
        .await?;

    assert_eq!(transactions[0].id, second.id);
    assert_eq!(transactions[1].id, first.id);

    Ok(())
}

/// Tests that another student's rows are never returned.
///
/// Expected: only the requested student's transactions
#[tokio::test]
async fn excludes_other_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    factory::create_transaction(db, student.id).await?;
    factory::create_transaction(db, other.id).await?;
    factory::create_transaction(db, other.id).await?;

    let transactions = TransactionRepository::new(db)
        .get_by_student(student.id)
        .await?;

    assert_eq!(transactions.len(), 1);
    assert!(transactions.iter().all(|t| t.student_id == student.id));

    Ok(())
}

/// Tests that a row with an unknown status fails the listing.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    TransactionFactory::new(db, student.id)
        .status("refunded")
        .build()
        .await?;

    let result = TransactionRepository::new(db)
        .get_by_student(student.id)
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
