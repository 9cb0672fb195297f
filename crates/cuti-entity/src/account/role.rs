//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// Stored as the Postgres enum `account_role` and serialized in upper case,
/// which is the only spelling the API emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    /// Regular employee; files and manages their own leave requests.
    Staff,
    /// Department manager; verifies submitted requests of their department.
    Manajer,
    /// Administrator; manages departments and accounts.
    Admin,
}

impl AccountRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a manager.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manajer)
    }

    /// Return the role as its canonical upper-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "STAFF",
            Self::Manajer => "MANAJER",
            Self::Admin => "ADMIN",
        }
    }
}

impl Default for AccountRole {
    fn default() -> Self {
        Self::Staff
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = cuti_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STAFF" => Ok(Self::Staff),
            "MANAJER" => Ok(Self::Manajer),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(cuti_core::AppError::validation("Role tidak valid")),
        }
    }
}
