//! Type-safe session management wrapper.
//!
//! `AuthSession` is the only code that touches session keys, so the key name and
//! the stored type stay consistent between login, logout and the auth guard.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_STUDENT_ID: &str = "auth:student";

/// Authentication state of a session: the id of the logged in student.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds a student to the session.
    ///
    /// The session id is cycled first so an id obtained before login cannot be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - Student id stored under a fresh session id
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn login(&self, student_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_STUDENT_ID, student_id)
            .await?;
        Ok(())
    }

    /// Retrieves the id of the logged in student.
    ///
    /// # Returns
    /// - `Ok(Some(student_id))` - A student is bound to the session
    /// - `Ok(None)` - Not logged in
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn get_student_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_STUDENT_ID).await?)
    }

    /// Destroys the session, deleting it from the store and clearing the cookie.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
