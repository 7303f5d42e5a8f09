//! Database bootstrap.

use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParam, Credential},
    util::password::hash_password,
};

/// Password shared by every sample student.
pub const SAMPLE_PASSWORD: &str = "password123";

/// Sample student seeded on first initialization.
pub struct SampleStudent {
    pub roll_number: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub year: i32,
    pub total_fee: f64,
    pub paid_fee: f64,
}

pub const SAMPLE_STUDENTS: [SampleStudent; 3] = [
    SampleStudent {
        roll_number: "2021001",
        name: "John Doe",
        email: "john.doe@vemu.edu",
        department: "Computer Science",
        year: 2,
        total_fee: 50000.0,
        paid_fee: 30000.0,
    },
    SampleStudent {
        roll_number: "2021002",
        name: "Jane Smith",
        email: "jane.smith@vemu.edu",
        department: "Electrical Engineering",
        year: 3,
        total_fee: 60000.0,
        paid_fee: 45000.0,
    },
    SampleStudent {
        roll_number: "2021003",
        name: "Mike Johnson",
        email: "mike.johnson@vemu.edu",
        department: "Mechanical Engineering",
        year: 1,
        total_fee: 40000.0,
        paid_fee: 20000.0,
    },
];

/// Result of `AdminService::init_database`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Sample students were inserted.
    Initialized,
    /// At least one student already existed; nothing was inserted.
    AlreadyInitialized,
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates any missing tables and seeds the sample students.
    ///
    /// Seeding happens only when the student table is empty and all three inserts
    /// share one database transaction, so calling this repeatedly is safe.
    ///
    /// # Returns
    /// - `Ok(InitOutcome::Initialized)` - Sample students inserted
    /// - `Ok(InitOutcome::AlreadyInitialized)` - Students already present
    /// - `Err(AppError)` - Migration, hashing or insert failed
    pub async fn init_database(&self) -> Result<InitOutcome, AppError> {
        Migrator::up(self.db, None).await?;

        if StudentRepository::new(self.db).any_exists().await? {
            tracing::info!("Database already initialized, skipping sample data");

            return Ok(InitOutcome::AlreadyInitialized);
        }

        let mut params = Vec::with_capacity(SAMPLE_STUDENTS.len());
        for sample in &SAMPLE_STUDENTS {
            let hash = hash_password(SAMPLE_PASSWORD.to_string()).await?;

            params.push(CreateStudentParam {
                roll_number: sample.roll_number.to_string(),
                name: sample.name.to_string(),
                email: sample.email.to_string(),
                credential: Credential::new(hash),
                department: sample.department.to_string(),
                year: sample.year,
                total_fee: sample.total_fee,
                paid_fee: sample.paid_fee,
            });
        }

        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);
        for param in params {
            repo.create(param).await?;
        }
        txn.commit().await?;

        tracing::info!(
            "Database initialized with {} sample students",
            SAMPLE_STUDENTS.len()
        );

        Ok(InitOutcome::Initialized)
    }
}
