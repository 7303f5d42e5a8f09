//! Student factory for creating test student rows.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use std::sync::OnceLock;

/// Password every factory-built student can log in with unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Hashes a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .unwrap_or_else(|e| panic!("failed to hash test password: {e}"))
}

/// Hash of `DEFAULT_PASSWORD`, computed once per test binary.
fn default_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(DEFAULT_PASSWORD)).clone()
}

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db)
///     .roll_number("2021001")
///     .password("secret")
///     .fees(50000.0, 30000.0)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    roll_number: String,
    name: String,
    email: String,
    password_hash: Option<String>,
    department: String,
    year: i32,
    total_fee: f64,
    paid_fee: f64,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - roll_number: `"R{id}"` where id is auto-incremented
    /// - name: `"Student {id}"`
    /// - email: `"student{id}@example.edu"`
    /// - password: `DEFAULT_PASSWORD`
    /// - department: `"Computer Science"`, year: `1`
    /// - total_fee: `50000.0`, paid_fee: `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            roll_number: format!("R{}", id),
            name: format!("Student {}", id),
            email: format!("student{}@example.edu", id),
            password_hash: None,
            department: "Computer Science".to_string(),
            year: 1,
            total_fee: 50000.0,
            paid_fee: 0.0,
        }
    }

    pub fn roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a plaintext password, hashed on `build()`.
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = Some(hash_password(password));
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets both total and paid fee.
    pub fn fees(mut self, total_fee: f64, paid_fee: f64) -> Self {
        self.total_fee = total_fee;
        self.paid_fee = paid_fee;
        self
    }

    /// Builds and inserts the student row.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            roll_number: ActiveValue::Set(self.roll_number),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(
                self.password_hash.unwrap_or_else(default_password_hash),
            ),
            department: ActiveValue::Set(self.department),
            year: ActiveValue::Set(self.year),
            total_fee: ActiveValue::Set(self.total_fee),
            paid_fee: ActiveValue::Set(self.paid_fee),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific roll number.
pub async fn create_student_with_roll(
    db: &DatabaseConnection,
    roll_number: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).roll_number(roll_number).build().await
}
