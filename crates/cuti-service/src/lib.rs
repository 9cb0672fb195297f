//! # cuti-service
//!
//! Business logic for Cuti. Each service orchestrates repositories and the
//! auth primitives to implement one directory or workflow.
//!
//! Services follow constructor injection; every dependency is handed in
//! at construction time as an `Arc`.

pub mod account;
pub mod context;
pub mod department;
pub mod leave;

pub use account::{AccountService, AdminAccountService};
pub use context::RequestContext;
pub use department::DepartmentService;
pub use leave::LeaveService;
