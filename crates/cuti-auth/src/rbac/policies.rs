//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use cuti_entity::account::AccountRole;

/// An operation gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Read a single department.
    DepartmentRead,
    /// Create, update and delete departments.
    DepartmentManage,
    /// Search accounts and update other accounts.
    AccountManage,
    /// Draft, submit, edit and delete one's own leave requests.
    LeaveFile,
    /// Approve or reject submitted leave requests.
    LeaveVerify,
}

/// Maps each role to the permissions it holds.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<AccountRole, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let base = [Permission::DepartmentRead, Permission::LeaveFile];

        let staff: HashSet<Permission> = base.into_iter().collect();

        let mut manager = staff.clone();
        manager.insert(Permission::LeaveVerify);

        let mut admin = staff.clone();
        admin.insert(Permission::DepartmentManage);
        admin.insert(Permission::AccountManage);

        let policies = HashMap::from([
            (AccountRole::Staff, staff),
            (AccountRole::Manajer, manager),
            (AccountRole::Admin, admin),
        ]);

        Self { policies }
    }

    /// Whether `role` holds `permission`.
    pub fn has_permission(&self, role: &AccountRole, permission: &Permission) -> bool {
        self.policies
            .get(role)
            .is_some_and(|set| set.contains(permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
