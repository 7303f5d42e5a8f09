use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials posted to `/api/login`.
///
/// Both fields are optional at the serde level so that a missing field surfaces as
/// a 400 validation error rather than a deserialization rejection.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct LoginDto {
    #[serde(rename = "rollNumber", default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Student projection returned on login. Never carries credentials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub year: i32,
    pub total_fee: f64,
    pub paid_fee: f64,
    pub balance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub student: StudentDto,
}

/// Full profile of the logged in student, including email.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StudentProfileDto {
    pub id: i32,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: i32,
    pub total_fee: f64,
    pub paid_fee: f64,
    pub balance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileResponseDto {
    pub success: bool,
    pub student: StudentProfileDto,
}

/// Publicly searchable student fields. No fee amounts, no credentials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PublicStudentDto {
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub year: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SearchResponseDto {
    pub success: bool,
    pub student: PublicStudentDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BalanceResponseDto {
    pub success: bool,
    pub balance: f64,
    pub total_fee: f64,
    pub paid_fee: f64,
}
