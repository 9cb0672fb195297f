//! Leave request lifecycle: draft, submit, verify, edit, delete and search.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use cuti_auth::rbac::{Permission, RbacEnforcer};
use cuti_core::error::AppError;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_database::repositories::{AccountRepository, LeaveRepository};
use cuti_entity::account::Account;
use cuti_entity::leave::{
    CreateLeave, LeaveFilter, LeaveRecord, LeaveRequest, LeaveStatus, UpdateLeave, VerifyDecision,
};

use super::scope;
use crate::context::RequestContext;

/// Dates and reason of a request, already validated.
#[derive(Debug, Clone)]
pub struct LeaveInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Drives leave requests through DRAFT -> TERKIRIM -> DITERIMA | DITOLAK.
#[derive(Debug, Clone)]
pub struct LeaveService {
    leaves: Arc<LeaveRepository>,
    accounts: Arc<AccountRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl LeaveService {
    pub fn new(
        leaves: Arc<LeaveRepository>,
        accounts: Arc<AccountRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            leaves,
            accounts,
            rbac,
        }
    }

    /// Creates a DRAFT owned by the caller.
    pub async fn save_draft(
        &self,
        ctx: &RequestContext,
        input: LeaveInput,
    ) -> Result<LeaveRequest, AppError> {
        self.rbac.require_permission(&ctx.role, &Permission::LeaveFile)?;

        let leave = self
            .leaves
            .create(&CreateLeave {
                account_username: ctx.username.clone(),
                start_date: input.start_date,
                end_date: input.end_date,
                reason: input.reason,
            })
            .await?;

        info!(
            leave_id = %leave.id,
            owner = %leave.account_username,
            days = leave.days(),
            "Leave draft saved"
        );
        Ok(leave)
    }

    /// Sends the caller's draft for verification.
    pub async fn submit(&self, ctx: &RequestContext, id: Uuid) -> Result<LeaveRequest, AppError> {
        self.rbac.require_permission(&ctx.role, &Permission::LeaveFile)?;

        let leave = self
            .leaves
            .submit(id, &ctx.username)
            .await?
            .ok_or_else(|| AppError::not_found("Draft izin cuti tidak ditemukan"))?;

        info!(leave_id = %id, owner = %ctx.username, "Leave request submitted");
        Ok(leave)
    }

    /// Approves or rejects a submitted request.
    pub async fn verify(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        decision: VerifyDecision,
    ) -> Result<LeaveRequest, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LeaveVerify)?;

        let next = LeaveStatus::from(decision);
        let record = self
            .leaves
            .find_record(id)
            .await?
            .filter(|r| r.status.can_transition_to(next))
            .ok_or_else(not_verifiable)?;

        let actor = self.current_account(ctx).await?;
        scope::authorize_verifier(&actor, &record)?;

        // A concurrent verification that won the race leaves no TERKIRIM row.
        let leave = self
            .leaves
            .verify(id, &actor.username, next)
            .await?
            .ok_or_else(not_verifiable)?;

        info!(
            leave_id = %id,
            manager = %actor.username,
            owner = %leave.account_username,
            status = %leave.status,
            "Leave request verified"
        );
        Ok(leave)
    }

    /// Edits the caller's draft. The merged dates must still be ordered.
    pub async fn update_draft(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateLeave,
    ) -> Result<LeaveRequest, AppError> {
        self.rbac.require_permission(&ctx.role, &Permission::LeaveFile)?;

        let leave = self
            .leaves
            .update_draft(id, &ctx.username, &changes)
            .await?
            .ok_or_else(draft_missing)?;

        info!(leave_id = %id, owner = %ctx.username, "Leave draft updated");
        Ok(leave)
    }

    /// Deletes the caller's draft.
    pub async fn remove_draft(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac.require_permission(&ctx.role, &Permission::LeaveFile)?;

        if !self.leaves.delete_draft(id, &ctx.username).await? {
            return Err(draft_missing());
        }

        info!(leave_id = %id, owner = %ctx.username, "Leave draft deleted");
        Ok(())
    }

    /// Lists the requests the caller is allowed to see.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        status: Option<LeaveStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<LeaveRecord>, AppError> {
        let viewer = self.current_account(ctx).await?;
        let filter = LeaveFilter {
            scope: scope::visibility(&viewer),
            status,
        };
        self.leaves.search(&filter, &page).await
    }

    /// Reloads the caller so role and department reflect the current state.
    async fn current_account(&self, ctx: &RequestContext) -> Result<Account, AppError> {
        self.accounts
            .find_by_username(&ctx.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}

fn not_verifiable() -> AppError {
    AppError::not_found("Izin cuti tidak ditemukan atau status tidak valid")
}

fn draft_missing() -> AppError {
    AppError::not_found("Draft tidak ditemukan")
}
