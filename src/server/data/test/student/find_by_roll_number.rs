use super::*;

/// Tests finding a student by exact roll number.
///
/// Expected: Ok(Some(Student)) with matching fields
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student_with_roll(db, "2021001").await?;

    let student = StudentRepository::new(db)
        .find_by_roll_number("2021001")
        .await?
        .unwrap();

    assert_eq!(student.id, created.id);
    assert_eq!(student.email, created.email);

    Ok(())
}

/// Tests that lookups are exact and do not match prefixes or padded input.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_partial_roll_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_with_roll(db, "2021001").await?;

    let repo = StudentRepository::new(db);

    assert!(repo.find_by_roll_number("202100").await?.is_none());
    assert!(repo.find_by_roll_number(" 2021001").await?.is_none());

    Ok(())
}

/// Tests finding a student by primary key.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn find_by_id_returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;
    let repo = StudentRepository::new(db);

    assert!(repo.find_by_id(created.id).await?.is_some());
    assert!(repo.find_by_id(created.id + 100).await?.is_none());

    Ok(())
}
