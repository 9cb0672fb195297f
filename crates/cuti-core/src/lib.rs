//! # cuti-core
//!
//! Core crate for the Cuti leave-management service. Contains the
//! configuration schema, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Cuti crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
