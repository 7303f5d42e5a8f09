use thiserror::Error;

/// Internal issues indicating unexpected data or library failures.
///
/// All variants result in a 500 Internal Server Error with a generic message.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column holds a value outside its state machine.
    #[error("Unknown {kind} status '{value}'")]
    UnknownStatus {
        /// Which state machine the value belongs to.
        kind: &'static str,
        /// The offending stored value.
        value: String,
    },

    /// Hashing a password or parsing a stored hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for InternalError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(err)
    }
}
