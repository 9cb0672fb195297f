//! Repositories for the three persisted aggregates.

pub mod account;
pub mod department;
pub mod leave;

pub use account::AccountRepository;
pub use department::DepartmentRepository;
pub use leave::LeaveRepository;
