//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A registered account joined with the name and email of its department.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique, immutable login name.
    pub username: String,
    /// Person name, letters and spaces only.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Instant after which the password no longer verifies.
    #[serde(skip_serializing)]
    pub password_expired_at: DateTime<Utc>,
    /// Login gate; inactive accounts cannot log in.
    pub flag_active: bool,
    /// RBAC role.
    pub role: AccountRole,
    /// Owning department.
    pub department_id: Uuid,
    /// Department name (joined).
    pub department_name: String,
    /// Department email (joined).
    pub department_email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if the account may attempt to log in.
    pub fn can_login(&self) -> bool {
        self.flag_active
    }

    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Desired username.
    pub username: String,
    /// Person name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Expiry of the pre-hashed password.
    pub password_expired_at: DateTime<Utc>,
    /// Initial login gate.
    pub flag_active: bool,
    /// Assigned role.
    pub role: AccountRole,
    /// Owning department.
    pub department_id: Uuid,
}

/// A replacement credential, always stored together with its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCredential {
    /// Argon2 password hash.
    pub password_hash: String,
    /// Expiry of the hash.
    pub password_expired_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// New person name.
    pub name: Option<String>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New role.
    pub role: Option<AccountRole>,
    /// New login gate.
    pub flag_active: Option<bool>,
    /// New password.
    pub credential: Option<NewCredential>,
}

/// Filters for account search, AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the email.
    pub email: Option<String>,
    /// Exact role.
    pub role: Option<AccountRole>,
    /// Exact login gate.
    pub flag_active: Option<bool>,
}
