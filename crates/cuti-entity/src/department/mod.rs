//! Department domain entities.

pub mod model;

pub use model::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};
