use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{auth::AuthError, AppError},
    model::student::{LoginParam, Student},
    util::password::verify_password,
};

/// Service for roll number and password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a student's credentials.
    ///
    /// The password is always checked against some hash, a dummy one when the roll
    /// number is unknown, so both failure cases take the same time and return the
    /// same error. Binding the student to a session is left to the caller.
    ///
    /// # Arguments
    /// - `param` - Validated roll number and password
    ///
    /// # Returns
    /// - `Ok(Student)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown roll number or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_roll_number(&param.roll_number)
            .await?;

        let stored_hash = student
            .as_ref()
            .map(|student| student.credential.as_phc().to_string());

        let verified = verify_password(stored_hash, param.password).await?;

        match student {
            Some(student) if verified => {
                tracing::info!("Student {} logged in", student.roll_number);

                Ok(student)
            }
            _ => {
                tracing::warn!("Failed login attempt for roll number {}", param.roll_number);

                Err(AuthError::InvalidCredentials(param.roll_number).into())
            }
        }
    }
}
