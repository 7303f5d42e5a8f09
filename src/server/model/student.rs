//! Student domain models and parameters.
//!
//! A student owns an academic record and the fee state. The outstanding balance is
//! always derived from `total_fee - paid_fee` and never stored.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{
        BalanceResponseDto, PublicStudentDto, StudentDto, StudentProfileDto,
    },
    server::error::AppError,
};

/// Stored password hash.
///
/// Wrapped so that it cannot leak through `Debug` output or be mistaken for a
/// displayable field.
#[derive(Clone, PartialEq)]
pub struct Credential(String);

impl Credential {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// The argon2 PHC string.
    pub fn as_phc(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Student with identity, academic fields and fee state.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub roll_number: String,
    pub name: String,
    pub email: String,
    pub credential: Credential,
    pub department: String,
    /// Year of study.
    pub year: i32,
    pub total_fee: f64,
    pub paid_fee: f64,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of a student's fee position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBalance {
    pub balance: f64,
    pub total_fee: f64,
    pub paid_fee: f64,
}

impl Student {
    /// Outstanding amount. Negative when the student has overpaid.
    pub fn balance(&self) -> f64 {
        self.total_fee - self.paid_fee
    }

    pub fn fee_balance(&self) -> FeeBalance {
        FeeBalance {
            balance: self.balance(),
            total_fee: self.total_fee,
            paid_fee: self.paid_fee,
        }
    }

    /// Projection returned on login.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            balance: self.balance(),
            id: self.id,
            name: self.name,
            roll_number: self.roll_number,
            department: self.department,
            year: self.year,
            total_fee: self.total_fee,
            paid_fee: self.paid_fee,
        }
    }

    /// Full profile of the logged in student.
    pub fn into_profile_dto(self) -> StudentProfileDto {
        StudentProfileDto {
            balance: self.balance(),
            id: self.id,
            name: self.name,
            roll_number: self.roll_number,
            email: self.email,
            department: self.department,
            year: self.year,
            total_fee: self.total_fee,
            paid_fee: self.paid_fee,
        }
    }

    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            roll_number: entity.roll_number,
            name: entity.name,
            email: entity.email,
            credential: Credential::new(entity.password_hash),
            department: entity.department,
            year: entity.year,
            total_fee: entity.total_fee,
            paid_fee: entity.paid_fee,
            created_at: entity.created_at,
        }
    }
}

impl FeeBalance {
    pub fn into_dto(self) -> BalanceResponseDto {
        BalanceResponseDto {
            success: true,
            balance: self.balance,
            total_fee: self.total_fee,
            paid_fee: self.paid_fee,
        }
    }
}

/// Publicly visible subset of a student. Holds no fee or credential data at all,
/// so nothing sensitive can be serialized from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicStudent {
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub year: i32,
}

impl PublicStudent {
    pub fn into_dto(self) -> PublicStudentDto {
        PublicStudentDto {
            name: self.name,
            roll_number: self.roll_number,
            department: self.department,
            year: self.year,
        }
    }
}

impl From<Student> for PublicStudent {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            roll_number: student.roll_number,
            department: student.department,
            year: student.year,
        }
    }
}

/// Validated login credentials.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub roll_number: String,
    pub password: String,
}

impl TryFrom<crate::model::student::LoginDto> for LoginParam {
    type Error = AppError;

    fn try_from(dto: crate::model::student::LoginDto) -> Result<Self, Self::Error> {
        match (dto.roll_number, dto.password) {
            (Some(roll_number), Some(password))
                if !roll_number.is_empty() && !password.is_empty() =>
            {
                Ok(Self {
                    roll_number,
                    password,
                })
            }
            _ => Err(AppError::BadRequest(
                "Roll number and password are required".to_string(),
            )),
        }
    }
}

/// Parameters for inserting a student. The password is hashed before it gets here.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub roll_number: String,
    pub name: String,
    pub email: String,
    pub credential: Credential,
    pub department: String,
    pub year: i32,
    pub total_fee: f64,
    pub paid_fee: f64,
}
