//! Request DTOs with validation.
//!
//! Required string fields default to empty when absent so the field rules,
//! not the JSON decoder, report them.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use cuti_core::error::AppError;
use cuti_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use cuti_entity::account::{AccountFilter, AccountRole};
use cuti_entity::department::{CreateDepartment, DepartmentFilter, UpdateDepartment};
use cuti_entity::leave::{LeaveStatus, UpdateLeave, VerifyDecision};
use cuti_service::account::{AdminUpdate, Registration, SelfUpdate};
use cuti_service::leave::LeaveInput;

use super::rules::{self, DEPARTMENT_ID_FORMAT};
use crate::extractors::path::parse_uuid;

// ── Accounts ─────────────────────────────────────────────────

/// Self-registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "rules::username"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "rules::person_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        email(message = "Format email tidak valid"),
        custom(function = "rules::email_length")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "rules::password_policy"))]
    pub password: String,
    #[serde(default)]
    #[validate(custom(function = "rules::department_id"))]
    pub departement_id: String,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Result<Registration, AppError> {
        Ok(Registration {
            department_id: parse_uuid(&self.departement_id, DEPARTMENT_ID_FORMAT)?,
            username: self.username,
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// Login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "rules::username"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "rules::password_length"))]
    pub password: String,
}

/// `PATCH /user/current` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrentRequest {
    #[validate(custom(function = "rules::person_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "rules::department_id"))]
    pub departement_id: Option<String>,
    #[validate(custom(function = "rules::password_policy"))]
    pub new_password: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "rules::current_password"))]
    pub current_password: String,
}

impl UpdateCurrentRequest {
    pub fn into_self_update(self) -> Result<SelfUpdate, AppError> {
        let department_id = self
            .departement_id
            .as_deref()
            .map(|id| parse_uuid(id, DEPARTMENT_ID_FORMAT))
            .transpose()?;

        Ok(SelfUpdate {
            name: self.name,
            department_id,
            new_password: self.new_password,
            current_password: self.current_password,
        })
    }
}

/// `PATCH /user/{userId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateRequest {
    #[validate(custom(function = "rules::person_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "rules::role"))]
    pub role: Option<String>,
    pub flag_active: Option<bool>,
    #[validate(custom(function = "rules::password_policy"))]
    pub password: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password saat ini wajib diisi"))]
    pub current_password: String,
}

impl AdminUpdateRequest {
    pub fn into_admin_update(self) -> Result<AdminUpdate, AppError> {
        let role = self
            .role
            .as_deref()
            .map(str::parse::<AccountRole>)
            .transpose()?;

        Ok(AdminUpdate {
            name: self.name,
            role,
            flag_active: self.flag_active,
            password: self.password,
            current_password: self.current_password,
        })
    }
}

/// `GET /user/search` query.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountSearchQuery {
    #[validate(length(max = 100, message = "Panjang nama maksimal 100 karakter"))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "Panjang email maksimal 100 karakter"))]
    pub email: Option<String>,
    #[validate(custom(function = "rules::role"))]
    pub role: Option<String>,
    pub flag_active: Option<bool>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Halaman minimal bernilai 1"))]
    pub page: u64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Ukuran harus bernilai 1 sampai 100"))]
    pub size: u64,
}

impl AccountSearchQuery {
    pub fn into_parts(self) -> Result<(AccountFilter, PageRequest), AppError> {
        let role = self
            .role
            .as_deref()
            .map(str::parse::<AccountRole>)
            .transpose()?;
        let page = PageRequest::new(self.page, self.size);

        Ok((
            AccountFilter {
                name: self.name,
                email: self.email,
                role,
                flag_active: self.flag_active,
            },
            page,
        ))
    }
}

// ── Departments ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[serde(default)]
    #[validate(custom(function = "rules::department_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        email(message = "Format email tidak valid"),
        custom(function = "rules::email_length")
    )]
    pub email: String,
}

impl From<CreateDepartmentRequest> for CreateDepartment {
    fn from(req: CreateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(custom(function = "rules::department_name"))]
    pub name: Option<String>,
    #[validate(
        email(message = "Format email tidak valid"),
        custom(function = "rules::email_length")
    )]
    pub email: Option<String>,
}

impl From<UpdateDepartmentRequest> for UpdateDepartment {
    fn from(req: UpdateDepartmentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

/// `GET /departement` query.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentSearchQuery {
    #[validate(custom(function = "rules::department_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "rules::email_length"))]
    pub email: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Halaman minimal bernilai 1"))]
    pub page: u64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Ukuran harus bernilai 1 sampai 100"))]
    pub size: u64,
}

impl DepartmentSearchQuery {
    pub fn into_parts(self) -> (DepartmentFilter, PageRequest) {
        (
            DepartmentFilter {
                name: self.name,
                email: self.email,
            },
            PageRequest::new(self.page, self.size),
        )
    }
}

// ── Leave requests ───────────────────────────────────────────

/// `POST /leave/draft` body. The owner is always the caller; `username`
/// is only checked for format.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "draft_dates", skip_on_field_errors = false))]
pub struct SaveDraftRequest {
    #[validate(custom(function = "rules::leave_username"))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "rules::start_date"))]
    pub start_date: String,
    #[serde(default)]
    #[validate(custom(function = "rules::end_date"))]
    pub end_date: String,
    #[serde(default)]
    #[validate(custom(function = "rules::reason"))]
    pub reason: String,
}

impl SaveDraftRequest {
    pub fn into_input(self) -> Result<LeaveInput, AppError> {
        Ok(LeaveInput {
            start_date: iso_date(&self.start_date, "Tanggal mulai harus dalam format ISO")?,
            end_date: iso_date(&self.end_date, "Tanggal selesai harus dalam format ISO")?,
            reason: self.reason,
        })
    }
}

fn draft_dates(req: &SaveDraftRequest) -> Result<(), ValidationError> {
    rules::date_order(&req.start_date, &req.end_date)
}

/// `PUT /leave/{leaveId}/update` body; absent fields keep their value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "edited_dates", skip_on_field_errors = false))]
pub struct UpdateDraftRequest {
    #[validate(custom(function = "rules::start_date"))]
    pub start_date: Option<String>,
    #[validate(custom(function = "rules::end_date"))]
    pub end_date: Option<String>,
    #[validate(custom(function = "rules::reason"))]
    pub reason: Option<String>,
}

impl UpdateDraftRequest {
    pub fn into_changes(self) -> Result<UpdateLeave, AppError> {
        let start_date = self
            .start_date
            .as_deref()
            .map(|d| iso_date(d, "Tanggal mulai harus dalam format ISO"))
            .transpose()?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|d| iso_date(d, "Tanggal selesai harus dalam format ISO"))
            .transpose()?;

        Ok(UpdateLeave {
            start_date,
            end_date,
            reason: self.reason,
        })
    }
}

fn edited_dates(req: &UpdateDraftRequest) -> Result<(), ValidationError> {
    match (&req.start_date, &req.end_date) {
        (Some(start), Some(end)) => rules::date_order(start, end),
        _ => Ok(()),
    }
}

/// `PUT /leave/{leaveId}/verify` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyLeaveRequest {
    #[serde(default, alias = "action")]
    #[validate(custom(function = "rules::verify_decision"))]
    pub status: String,
}

impl VerifyLeaveRequest {
    pub fn decision(&self) -> Result<VerifyDecision, AppError> {
        self.status.parse()
    }
}

/// `GET /leave` query.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeaveSearchQuery {
    #[validate(custom(function = "rules::leave_status"))]
    pub status: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Halaman minimal bernilai 1"))]
    pub page: u64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "Ukuran harus bernilai 1 sampai 100"))]
    pub size: u64,
}

impl LeaveSearchQuery {
    pub fn into_parts(self) -> Result<(Option<LeaveStatus>, PageRequest), AppError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<LeaveStatus>)
            .transpose()?;
        Ok((status, PageRequest::new(self.page, self.size)))
    }
}

// ── Shared helpers ───────────────────────────────────────────

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn iso_date(value: &str, message: &'static str) -> Result<chrono::NaiveDate, AppError> {
    rules::parse_iso_date(value).ok_or_else(|| AppError::validation(message))
}
