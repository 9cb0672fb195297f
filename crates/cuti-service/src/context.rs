//! The authenticated actor of the current request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cuti_auth::jwt::Claims;
use cuti_entity::account::AccountRole;

/// Who is acting, as asserted by a verified bearer token.
///
/// Role and department are a snapshot from token issue time; services that
/// need current values reload the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub username: String,
    pub role: AccountRole,
    pub department_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(username: impl Into<String>, role: AccountRole, department_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role,
            department_name: department_name.into(),
            request_time: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.role, claims.departement_name)
    }
}
