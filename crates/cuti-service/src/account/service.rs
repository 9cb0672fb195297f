//! Registration, login and self-service profile updates.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use cuti_auth::jwt::JwtEncoder;
use cuti_auth::password::{PasswordHasher, PasswordPolicy};
use cuti_core::error::AppError;
use cuti_database::repositories::{AccountRepository, DepartmentRepository};
use cuti_entity::account::{Account, AccountRole, CreateAccount, NewCredential, UpdateAccount};

use crate::context::RequestContext;

/// The single message for every failed login, whatever the cause.
pub const LOGIN_FAILED: &str = "Username atau password salah, atau akun belum aktif";
/// Re-authentication failure on profile changes.
pub const WRONG_PASSWORD: &str = "Password yang anda masukkan salah";

/// Self-registration input.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub department_id: Uuid,
}

/// Changes an account holder may make to their own account.
#[derive(Debug, Clone)]
pub struct SelfUpdate {
    pub name: Option<String>,
    pub department_id: Option<Uuid>,
    pub new_password: Option<String>,
    /// Always required; re-verified before anything changes.
    pub current_password: String,
}

/// Handles account operations performed by the account holder.
#[derive(Debug, Clone)]
pub struct AccountService {
    accounts: Arc<AccountRepository>,
    departments: Arc<DepartmentRepository>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    encoder: Arc<JwtEncoder>,
    default_active: bool,
}

impl AccountService {
    pub fn new(
        accounts: Arc<AccountRepository>,
        departments: Arc<DepartmentRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        default_active: bool,
    ) -> Self {
        Self {
            accounts,
            departments,
            hasher,
            policy: PasswordPolicy::new(),
            encoder,
            default_active,
        }
    }

    /// Registers a STAFF account in an existing department.
    pub async fn register(&self, data: Registration) -> Result<Account, AppError> {
        self.policy.validate(&data.password)?;
        self.ensure_department(data.department_id).await?;

        if let Some(existing) = self
            .accounts
            .find_conflicting(&data.username, &data.email)
            .await?
        {
            return Err(if existing.username == data.username {
                AppError::conflict("Username sudah terdaftar")
            } else {
                AppError::conflict("Email sudah terdaftar")
            });
        }

        let credential = self.hasher.hash_with_expiry(&data.password)?;
        let account = self
            .accounts
            .create(&CreateAccount {
                username: data.username,
                name: data.name,
                email: data.email,
                password_hash: credential.hash,
                password_expired_at: credential.expires_at,
                flag_active: self.default_active,
                role: AccountRole::Staff,
                department_id: data.department_id,
            })
            .await?;

        info!(
            username = %account.username,
            department_id = %account.department_id,
            active = account.flag_active,
            "Account registered"
        );
        Ok(account)
    }

    /// Verifies credentials and issues a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<(Account, String), AppError> {
        let Some(account) = self.accounts.find_by_username(username).await? else {
            warn!(username = %username, "Login failed: unknown account");
            return Err(AppError::authentication(LOGIN_FAILED));
        };

        if !account.can_login() {
            warn!(username = %username, "Login failed: account inactive");
            return Err(AppError::authentication(LOGIN_FAILED));
        }

        let valid = self
            .hasher
            .verify(password, &account.password_hash, account.password_expired_at)?;
        if !valid {
            warn!(username = %username, "Login failed: bad or expired password");
            return Err(AppError::authentication(LOGIN_FAILED));
        }

        let token = self.encoder.issue(&account)?;
        info!(username = %account.username, role = %account.role, "Login succeeded");
        Ok((account, token))
    }

    /// Updates the caller's own account and re-issues their token.
    pub async fn update_self(
        &self,
        ctx: &RequestContext,
        data: SelfUpdate,
    ) -> Result<(Account, String), AppError> {
        let account = self
            .accounts
            .find_by_username(&ctx.username)
            .await?
            .ok_or_else(|| AppError::not_found("User tidak ditemukan"))?;

        let valid = self.hasher.verify(
            &data.current_password,
            &account.password_hash,
            account.password_expired_at,
        )?;
        if !valid {
            return Err(AppError::authentication(WRONG_PASSWORD));
        }

        if let Some(department_id) = data.department_id {
            self.ensure_department(department_id).await?;
        }

        let credential = match data.new_password.as_deref() {
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
        let password_changed = credential.is_some();

        let updated = self
            .accounts
            .update(
                &account.username,
                &UpdateAccount {
                    name: data.name,
                    department_id: data.department_id,
                    credential,
                    ..UpdateAccount::default()
                },
            )
            .await?;

        let token = self.encoder.issue(&updated)?;
        info!(
            username = %updated.username,
            password_changed,
            "Account updated by owner"
        );
        Ok((updated, token))
    }

    async fn ensure_department(&self, id: Uuid) -> Result<(), AppError> {
        match self.departments.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::validation("Departemen tidak ditemukan")),
        }
    }
}
