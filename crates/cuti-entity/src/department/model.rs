//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organisational unit every account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Unique display name, letters and spaces only.
    pub name: String,
    /// Unique contact email.
    pub email: String,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Department name.
    pub name: String,
    /// Department email.
    pub email: String,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
}

impl UpdateDepartment {
    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Substring filters for department search, AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the email.
    pub email: Option<String>,
}
