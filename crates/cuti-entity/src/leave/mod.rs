//! Leave request domain entities.

pub mod model;
pub mod status;

pub use model::{CreateLeave, LeaveFilter, LeaveRecord, LeaveRequest, LeaveScope, UpdateLeave};
pub use status::{LeaveStatus, VerifyDecision};
