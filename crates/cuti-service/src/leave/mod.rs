//! Leave request workflow.

pub mod scope;
pub mod service;

pub use service::{LeaveInput, LeaveService};
