//! Complaint data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::complaint::{Complaint, CreateComplaintParam};

/// Repository for student complaints.
pub struct ComplaintRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ComplaintRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a complaint. `resolved_at` always starts empty.
    pub async fn create(&self, param: CreateComplaintParam) -> Result<Complaint, DbErr> {
        let entity = entity::prelude::Complaint::insert(entity::complaint::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            subject: ActiveValue::Set(param.subject),
            message: ActiveValue::Set(param.message),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Complaint::from_entity(entity)
    }

    /// Gets every complaint filed by a student, newest first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Complaint>, DbErr> {
        entity::prelude::Complaint::find()
            .filter(entity::complaint::Column::StudentId.eq(student_id))
            .order_by_desc(entity::complaint::Column::CreatedAt)
            .order_by_desc(entity::complaint::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Complaint::from_entity)
            .collect()
    }
}
