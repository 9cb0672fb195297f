//! Leave request entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::LeaveStatus;

/// A leave request row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveRequest {
    pub id: Uuid,
    /// Owner of the request.
    pub account_username: String,
    /// Manager who verified the request, once verified.
    pub manager_username: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Number of calendar days covered, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether `username` owns this request.
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.account_username == username
    }
}

/// A leave request joined with its owner, as returned by search.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveRecord {
    pub id: Uuid,
    pub account_username: String,
    pub owner_name: String,
    pub owner_department_id: Uuid,
    pub owner_department_name: String,
    pub manager_username: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeave {
    pub account_username: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Partial edit of a draft; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLeave {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// Visibility scope for leave search, derived from the caller's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveScope {
    /// Only the given owner's requests.
    Owner(String),
    /// Every request in the department except other owners' drafts.
    Department { department_id: Uuid, viewer: String },
    /// Every request.
    All,
}

/// Filters for leave search.
#[derive(Debug, Clone)]
pub struct LeaveFilter {
    pub scope: LeaveScope,
    pub status: Option<LeaveStatus>,
}
