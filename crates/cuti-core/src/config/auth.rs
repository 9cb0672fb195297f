//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in `config/default.toml`.
const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Token signing and credential lifetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for bearer tokens.
    pub jwt_secret: String,
    /// Bearer token lifetime.
    pub token_ttl_hours: u64,
    /// Days a freshly set password keeps verifying.
    pub password_ttl_days: u64,
    /// Whether self-registered accounts may log in before an admin activates them.
    pub default_account_active: bool,
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == PLACEHOLDER_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: PLACEHOLDER_SECRET.to_string(),
            token_ttl_hours: 24,
            password_ttl_days: 90,
            default_account_active: false,
        }
    }
}
