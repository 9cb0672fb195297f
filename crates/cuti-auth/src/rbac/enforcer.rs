//! Checks whether a role holds a required permission.

use cuti_core::error::AppError;
use cuti_entity::account::AccountRole;

use super::policies::{Permission, RbacPolicies};

/// Message returned whenever a role check fails.
pub const ACCESS_DENIED: &str = "Unauthorized access";

/// Enforces role-based access control.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Returns `Forbidden` unless `role` holds `permission`.
    pub fn require_permission(
        &self,
        role: &AccountRole,
        permission: &Permission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::forbidden(ACCESS_DENIED))
        }
    }

    pub fn has_permission(&self, role: &AccountRole, permission: &Permission) -> bool {
        self.policies.has_permission(role, permission)
    }
}
