//! Department directory.

pub mod service;

pub use service::DepartmentService;
