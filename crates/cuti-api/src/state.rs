//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cuti_auth::jwt::{JwtDecoder, JwtEncoder};
use cuti_auth::password::PasswordHasher;
use cuti_auth::rbac::RbacEnforcer;
use cuti_core::config::AppConfig;
use cuti_database::DatabasePool;
use cuti_database::repositories::{AccountRepository, DepartmentRepository, LeaveRepository};
use cuti_service::{AccountService, AdminAccountService, DepartmentService, LeaveService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token verifier
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Department directory
    pub department_service: Arc<DepartmentService>,
    /// Registration, login and self-service updates
    pub account_service: Arc<AccountService>,
    /// Admin account search and updates
    pub admin_account_service: Arc<AdminAccountService>,
    /// Leave workflow
    pub leave_service: Arc<LeaveService>,
}

impl AppState {
    /// Wires repositories, auth primitives and services on top of `db`.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let department_repo = Arc::new(DepartmentRepository::new(pool.clone()));
        let account_repo = Arc::new(AccountRepository::new(pool.clone()));
        let leave_repo = Arc::new(LeaveRepository::new(pool));

        let password_hasher = Arc::new(PasswordHasher::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let department_service = Arc::new(DepartmentService::new(
            Arc::clone(&department_repo),
            Arc::clone(&rbac_enforcer),
        ));
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&account_repo),
            Arc::clone(&department_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
            config.auth.default_account_active,
        ));
        let admin_account_service = Arc::new(AdminAccountService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&rbac_enforcer),
        ));
        let leave_service = Arc::new(LeaveService::new(
            leave_repo,
            account_repo,
            rbac_enforcer,
        ));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            department_service,
            account_service,
            admin_account_service,
            leave_service,
        }
    }
}
