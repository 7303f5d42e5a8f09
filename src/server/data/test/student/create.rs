use super::*;

fn param(roll_number: &str, email: &str) -> CreateStudentParam {
    CreateStudentParam {
        roll_number: roll_number.to_string(),
        name: "Jane Smith".to_string(),
        email: email.to_string(),
        credential: Credential::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        department: "Electrical Engineering".to_string(),
        year: 3,
        total_fee: 60000.0,
        paid_fee: 45000.0,
    }
}

/// Tests inserting a student.
///
/// Expected: Ok with generated id and the stored fee state
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(param("2021002", "jane.smith@vemu.edu")).await?;

    assert!(student.id > 0);
    assert_eq!(student.roll_number, "2021002");
    assert_eq!(student.balance(), 15000.0);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that roll numbers are unique.
///
/// Expected: Err on the second insert with the same roll number
#[tokio::test]
async fn rejects_duplicate_roll_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(param("2021002", "jane.smith@vemu.edu")).await?;

    let result = repo.create(param("2021002", "other@vemu.edu")).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(param("2021002", "jane.smith@vemu.edu")).await?;

    let result = repo.create(param("2021099", "jane.smith@vemu.edu")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that an empty table reports no students.
///
/// Expected: Ok(false)
#[tokio::test]
async fn any_exists_is_false_on_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!StudentRepository::new(db).any_exists().await?);

    factory::create_student(db).await?;

    assert!(StudentRepository::new(db).any_exists().await?);

    Ok(())
}
