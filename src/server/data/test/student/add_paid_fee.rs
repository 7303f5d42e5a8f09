use super::*;

/// Tests incrementing the paid fee.
///
/// Expected: Ok(Some) with paid_fee increased by exactly the amount
#[tokio::test]
async fn adds_amount_to_paid_fee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .fees(50000.0, 30000.0)
        .build()
        .await?;

    let student = StudentRepository::new(db)
        .add_paid_fee(created.id, 5000.0)
        .await?
        .unwrap();

    assert_eq!(student.paid_fee, 35000.0);
    assert_eq!(student.balance(), 15000.0);

    Ok(())
}

/// Tests that negative amounts reduce the paid fee.
///
/// Expected: Ok(Some) with paid_fee decreased
#[tokio::test]
async fn negative_amount_reduces_paid_fee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .fees(40000.0, 20000.0)
        .build()
        .await?;

    let student = StudentRepository::new(db)
        .add_paid_fee(created.id, -2500.0)
        .await?
        .unwrap();

    assert_eq!(student.paid_fee, 17500.0);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Ok(None) and no other row touched
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.add_paid_fee(other.id + 1, 5000.0).await?;

    assert!(result.is_none());
    assert_eq!(
        repo.find_by_id(other.id).await?.unwrap().paid_fee,
        other.paid_fee
    );

    Ok(())
}
