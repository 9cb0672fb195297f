//! Who may see and who may verify a leave request.

use cuti_core::error::AppError;
use cuti_entity::account::{Account, AccountRole};
use cuti_entity::leave::{LeaveRecord, LeaveScope};

/// Returned when a manager tries to verify a request outside their reach.
pub const NOT_YOUR_REQUEST: &str = "Anda tidak berhak memverifikasi izin ini";

/// Search visibility for `viewer`, based on their current role.
///
/// Staff see their own requests. Managers see their department without other
/// people's drafts. Admins see everything.
pub fn visibility(viewer: &Account) -> LeaveScope {
    match viewer.role {
        AccountRole::Staff => LeaveScope::Owner(viewer.username.clone()),
        AccountRole::Manajer => LeaveScope::Department {
            department_id: viewer.department_id,
            viewer: viewer.username.clone(),
        },
        AccountRole::Admin => LeaveScope::All,
    }
}

/// Checks that `actor` is a manager of the owner's department and not the owner.
pub fn authorize_verifier(actor: &Account, leave: &LeaveRecord) -> Result<(), AppError> {
    let same_department = actor.department_id == leave.owner_department_id;
    let own_request = actor.username == leave.account_username;

    if actor.role.is_manager() && same_department && !own_request {
        Ok(())
    } else {
        Err(AppError::forbidden(NOT_YOUR_REQUEST))
    }
}
