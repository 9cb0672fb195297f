//! Admin account management: search and updates of other accounts.

use std::sync::Arc;

use tracing::info;

use cuti_auth::password::{PasswordHasher, PasswordPolicy};
use cuti_auth::rbac::{Permission, RbacEnforcer};
use cuti_core::error::AppError;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_database::repositories::AccountRepository;
use cuti_entity::account::{Account, AccountFilter, AccountRole, NewCredential, UpdateAccount};

use super::service::WRONG_PASSWORD;
use crate::context::RequestContext;

/// Changes an admin may make to any account.
#[derive(Debug, Clone)]
pub struct AdminUpdate {
    pub name: Option<String>,
    pub role: Option<AccountRole>,
    pub flag_active: Option<bool>,
    pub password: Option<String>,
    /// The admin's own password.
    pub current_password: String,
}

/// Handles administrative account operations.
#[derive(Debug, Clone)]
pub struct AdminAccountService {
    accounts: Arc<AccountRepository>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    rbac: Arc<RbacEnforcer>,
}

impl AdminAccountService {
    pub fn new(
        accounts: Arc<AccountRepository>,
        hasher: Arc<PasswordHasher>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            policy: PasswordPolicy::new(),
            rbac,
        }
    }

    /// Searches accounts.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        filter: AccountFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Account>, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::AccountManage)?;

        self.accounts.search(&filter, &page).await
    }

    /// Updates another account after re-verifying the admin's own password.
    pub async fn update_account(
        &self,
        ctx: &RequestContext,
        target: &str,
        data: AdminUpdate,
    ) -> Result<Account, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::AccountManage)?;

        let actor = self
            .accounts
            .find_by_username(&ctx.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
        if !actor.is_admin() {
            return Err(AppError::forbidden(cuti_auth::rbac::enforcer::ACCESS_DENIED));
        }

        let valid = self.hasher.verify(
            &data.current_password,
            &actor.password_hash,
            actor.password_expired_at,
        )?;
        if !valid {
            return Err(AppError::authentication(WRONG_PASSWORD));
        }

        let credential = match data.password.as_deref() {
            Some(password) => {
                self.policy.validate(password)?;
                let hashed = self.hasher.hash_with_expiry(password)?;
                Some(NewCredential {
                    password_hash: hashed.hash,
                    password_expired_at: hashed.expires_at,
                })
            }
            None => None,
        };

        let updated = self
            .accounts
            .update(
                target,
                &UpdateAccount {
                    name: data.name,
                    role: data.role,
                    flag_active: data.flag_active,
                    credential,
                    ..UpdateAccount::default()
                },
            )
            .await?;

        info!(
            admin = %ctx.username,
            target = %updated.username,
            role = %updated.role,
            active = updated.flag_active,
            "Account updated by admin"
        );
        Ok(updated)
    }
}
