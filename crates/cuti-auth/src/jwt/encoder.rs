//! Signs bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use cuti_core::config::AuthConfig;
use cuti_core::error::AppError;
use cuti_entity::account::Account;

use super::claims::Claims;

/// Issues HS256 tokens with a fixed lifetime.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::hours(config.token_ttl_hours as i64),
        }
    }

    /// Issues a token describing the account as it is right now.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.username.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            departement_name: account.department_name.clone(),
            password_expired_at: account.password_expired_at,
            flag_active: account.flag_active,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    /// Signs arbitrary claims.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
