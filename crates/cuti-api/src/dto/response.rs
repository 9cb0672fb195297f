//! Response DTOs.
//!
//! Every success body is `{data}` or, for searches, `{data, paging}`.
//! Account payloads never carry the password hash or its expiry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cuti_core::types::pagination::{PageResponse, Paging};
use cuti_entity::account::{Account, AccountRole};
use cuti_entity::department::Department;
use cuti_entity::leave::{LeaveRecord, LeaveRequest, LeaveStatus};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T, U: Into<T>> From<PageResponse<U>> for PagedResponse<T> {
    fn from(page: PageResponse<U>) -> Self {
        let page = page.map(Into::into);
        Self {
            data: page.items,
            paging: page.paging,
        }
    }
}

// ── Departments ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub departement_id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Department> for DepartmentResponse {
    fn from(d: Department) -> Self {
        Self {
            departement_id: d.id,
            name: d.name,
            email: d.email,
        }
    }
}

/// Department as embedded in account payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub name: String,
    pub email: String,
}

// ── Accounts ─────────────────────────────────────────────────

/// Returned by self-registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredAccountResponse {
    pub username: String,
    pub name: String,
    pub email: String,
    pub departement: DepartmentSummary,
}

impl From<Account> for RegisteredAccountResponse {
    fn from(a: Account) -> Self {
        Self {
            username: a.username,
            name: a.name,
            email: a.email,
            departement: DepartmentSummary {
                name: a.department_name,
                email: a.department_email,
            },
        }
    }
}

/// Account summary for admin search and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub flag_active: bool,
    pub departement: DepartmentSummary,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            username: a.username,
            name: a.name,
            email: a.email,
            role: a.role,
            flag_active: a.flag_active,
            departement: DepartmentSummary {
                name: a.department_name,
                email: a.department_email,
            },
        }
    }
}

/// Returned by `PATCH /user/current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
}

impl From<Account> for ProfileResponse {
    fn from(a: Account) -> Self {
        Self {
            name: a.name,
            email: a.email,
        }
    }
}

// ── Leave requests ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    pub id: Uuid,
    pub username: String,
    pub manager_username: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(l: LeaveRequest) -> Self {
        Self {
            id: l.id,
            username: l.account_username,
            manager_username: l.manager_username,
            start_date: l.start_date,
            end_date: l.end_date,
            reason: l.reason,
            status: l.status,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveOwner {
    pub username: String,
    pub name: String,
    pub departement_name: String,
}

/// One row of the scoped leave search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveItemResponse {
    pub id: Uuid,
    pub owner: LeaveOwner,
    pub manager_username: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LeaveRecord> for LeaveItemResponse {
    fn from(r: LeaveRecord) -> Self {
        Self {
            id: r.id,
            owner: LeaveOwner {
                username: r.account_username,
                name: r.owner_name,
                departement_name: r.owner_department_name,
            },
            manager_username: r.manager_username,
            start_date: r.start_date,
            end_date: r.end_date,
            reason: r.reason,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Outcome of a verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub message: String,
    pub leave: LeaveResponse,
}

// ── Health ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}
