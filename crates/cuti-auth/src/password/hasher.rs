//! Argon2id credential codec with an expiry attached to every hash.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use chrono::{DateTime, Duration, Utc};

use cuti_core::config::AuthConfig;
use cuti_core::error::AppError;

/// A freshly produced hash and the instant after which it stops verifying.
#[derive(Debug, Clone)]
pub struct HashedCredential {
    pub hash: String,
    pub expires_at: DateTime<Utc>,
}

/// Hashes and verifies passwords using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    ttl: Duration,
}

impl PasswordHasher {
    /// Creates a hasher whose credentials live `password_ttl_days`.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            ttl: Duration::days(config.password_ttl_days as i64),
        }
    }

    /// Hashes `password` with a random salt and stamps the expiry.
    pub fn hash_with_expiry(&self, password: &str) -> Result<HashedCredential, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(HashedCredential {
            hash: hash.to_string(),
            expires_at: Utc::now() + self.ttl,
        })
    }

    /// Verifies `password` against a stored hash.
    ///
    /// Returns `Ok(false)` when the credential has expired or the password
    /// does not match. Expiry is checked before any hashing work.
    pub fn verify(
        &self,
        password: &str,
        stored_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        if Utc::now() > expires_at {
            return Ok(false);
        }

        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
