//! Password hashing and verification.
//!
//! Argon2id with a random salt per hash. Both operations are CPU and memory heavy
//! and run on the blocking thread pool.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hash verified against when a roll number does not exist, so that unknown and
/// known roll numbers cost the same.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

fn hash_blocking(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify_blocking(stored_hash: &str, password: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn dummy_hash() -> Result<&'static str, InternalError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }

    let hash = hash_blocking("dummy password never matches")?;

    Ok(DUMMY_HASH.get_or_init(|| hash))
}

/// Hashes a plaintext password into an argon2 PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC string including algorithm, parameters and salt
/// - `Err(AppError::InternalErr)` - Hashing failed
/// - `Err(AppError::JoinErr)` - The blocking task panicked
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || hash_blocking(&password)).await??;

    Ok(hash)
}

/// Verifies a password against a stored hash in constant time.
///
/// When `stored_hash` is `None` the password is checked against a dummy hash and
/// the result is always `false`.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or no hash was given
/// - `Err(AppError::InternalErr)` - Stored hash is not a valid PHC string
pub async fn verify_password(stored_hash: Option<String>, password: String) -> Result<bool, AppError> {
    let verified = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_blocking(&hash, &password),
        None => {
            verify_blocking(dummy_hash()?, &password)?;
            Ok(false)
        }
    })
    .await??;

    Ok(verified)
}
