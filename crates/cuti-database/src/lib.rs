//! # cuti-database
//!
//! PostgreSQL connection management and the repositories for departments,
//! accounts and leave requests.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
