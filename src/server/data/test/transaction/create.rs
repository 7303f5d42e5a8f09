use super::*;

fn param(student_id: i32) -> CreateTransactionParam {
    CreateTransactionParam {
        student_id,
        amount: 2500.0,
        payment_method: "card".to_string(),
        status: TransactionStatus::Pending,
        description: "Library fine".to_string(),
    }
}

/// Tests inserting a transaction.
///
/// Expected: Ok with a UUID v4 transaction id and the given status
#[tokio::test]
async fn creates_transaction_with_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let transaction = TransactionRepository::new(db)
        .create(param(student.id))
        .await?;

    let uuid = uuid::Uuid::parse_str(&transaction.transaction_id).unwrap();
    assert_eq!(uuid.get_version_num(), 4);
    assert_eq!(transaction.status, TransactionStatus::Pending);
    assert_eq!(transaction.student_id, student.id);

    Ok(())
}

/// Tests that every insert receives a distinct transaction id.
///
/// Expected: two different transaction ids
#[tokio::test]
async fn generates_distinct_transaction_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let repo = TransactionRepository::new(db);

    let first = repo.create(param(student.id)).await?;
    let second = repo.create(param(student.id)).await?;

    assert_ne!(first.transaction_id, second.transaction_id);

    Ok(())
}

/// Tests inserting when the transaction table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_transaction_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let result = TransactionRepository::new(db).create(param(student.id)).await;

    assert!(result.is_err());

    Ok(())
}
