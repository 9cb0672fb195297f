//! Account registration, login, self-service and admin management.

pub mod admin;
pub mod service;

pub use admin::{AdminAccountService, AdminUpdate};
pub use service::{AccountService, Registration, SelfUpdate};
