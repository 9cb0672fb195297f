//! Claims carried by every bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cuti_entity::account::AccountRole;

/// Identity snapshot taken when the token was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject; the username.
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub departement_name: String,
    pub password_expired_at: DateTime<Utc>,
    pub flag_active: bool,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
