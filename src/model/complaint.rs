use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct SubmitComplaintDto {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ComplaintDto {
    pub id: i32,
    pub subject: String,
    pub message: String,
    pub status: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub created_at: String,
    /// `YYYY-MM-DD HH:MM:SS`, UTC, or `null` while unresolved.
    pub resolved_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ComplaintListDto {
    pub success: bool,
    pub complaints: Vec<ComplaintDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SubmittedComplaintDto {
    pub id: i32,
    pub subject: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SubmitComplaintResponseDto {
    pub success: bool,
    pub message: String,
    pub complaint: SubmittedComplaintDto,
}
