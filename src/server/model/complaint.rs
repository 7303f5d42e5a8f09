//! Complaint domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::complaint::{ComplaintDto, SubmitComplaintDto, SubmittedComplaintDto},
    server::{
        error::{internal::InternalError, AppError},
        util::time::format_timestamp,
    },
};

/// Lifecycle of a complaint: `open` to `in_progress` to `resolved`.
///
/// Complaints are always created `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(InternalError::UnknownStatus {
                kind: "complaint",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Complaint {
    pub id: i32,
    pub student_id: i32,
    pub subject: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Complaint {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known `ComplaintStatus`
    pub fn from_entity(entity: entity::complaint::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<ComplaintStatus>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            subject: entity.subject,
            message: entity.message,
            status,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        })
    }

    pub fn into_dto(self) -> ComplaintDto {
        ComplaintDto {
            id: self.id,
            subject: self.subject,
            message: self.message,
            status: self.status.to_string(),
            created_at: format_timestamp(&self.created_at),
            resolved_at: self.resolved_at.as_ref().map(format_timestamp),
        }
    }

    pub fn into_submitted_dto(self) -> SubmittedComplaintDto {
        SubmittedComplaintDto {
            id: self.id,
            subject: self.subject,
            status: self.status.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateComplaintParam {
    pub student_id: i32,
    pub subject: String,
    pub message: String,
    pub status: ComplaintStatus,
}

/// Validated complaint submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitComplaintParam {
    pub subject: String,
    pub message: String,
}

impl TryFrom<SubmitComplaintDto> for SubmitComplaintParam {
    type Error = AppError;

    fn try_from(dto: SubmitComplaintDto) -> Result<Self, Self::Error> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match (non_blank(dto.subject), non_blank(dto.message)) {
            (Some(subject), Some(message)) => Ok(Self { subject, message }),
            _ => Err(AppError::BadRequest(
                "Subject and message are required".to_string(),
            )),
        }
    }
}

impl SubmitComplaintParam {
    pub fn into_create_param(self, student_id: i32) -> CreateComplaintParam {
        CreateComplaintParam {
            student_id,
            subject: self.subject,
            message: self.message,
            status: ComplaintStatus::Open,
        }
    }
}
