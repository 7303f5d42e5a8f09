use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::student::StudentRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::student::Student,
};

/// Resolves the session of a request to the logged in student.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged in student.
    ///
    /// A session pointing at a student that no longer exists counts as not logged
    /// in.
    ///
    /// # Returns
    /// - `Ok(Student)` - Freshly loaded student bound to the session
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No student in session or in database
    /// - `Err(AppError::DbErr | SessionErr)` - Lookup failed
    pub async fn require(&self) -> Result<Student, AppError> {
        let Some(student_id) = AuthSession::new(self.session).get_student_id().await? else {
            return Err(AuthError::Unauthenticated.into());
        };

        let Some(student) = StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
        else {
            tracing::debug!("Session refers to missing student {}", student_id);

            return Err(AuthError::Unauthenticated.into());
        };

        Ok(student)
    }
}
