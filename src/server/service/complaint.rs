use sea_orm::DatabaseConnection;

use crate::server::{
    data::complaint::ComplaintRepository,
    error::AppError,
    model::complaint::{Complaint, SubmitComplaintParam},
};

pub struct ComplaintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new complaint with status `open`.
    pub async fn submit(
        &self,
        student_id: i32,
        param: SubmitComplaintParam,
    ) -> Result<Complaint, AppError> {
        let complaint = ComplaintRepository::new(self.db)
            .create(param.into_create_param(student_id))
            .await?;

        tracing::info!("Student {} filed complaint {}", student_id, complaint.id);

        Ok(complaint)
    }

    /// Gets a student's complaints, newest first.
    pub async fn list(&self, student_id: i32) -> Result<Vec<Complaint>, AppError> {
        let complaints = ComplaintRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        Ok(complaints)
    }
}
