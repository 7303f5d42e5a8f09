use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository, error::AppError, model::student::PublicStudent,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the public profile of a student by exact roll number.
    ///
    /// # Returns
    /// - `Ok(PublicStudent)` - Name, roll number, department and year
    /// - `Err(AppError::NotFound)` - No student with that roll number
    pub async fn search_public(&self, roll_number: &str) -> Result<PublicStudent, AppError> {
        tracing::debug!("Public search for roll number {}", roll_number);

        StudentRepository::new(self.db)
            .find_by_roll_number(roll_number)
            .await?
            .map(PublicStudent::from)
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
