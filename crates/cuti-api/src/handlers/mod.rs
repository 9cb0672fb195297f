//! Route handlers organized by domain.

pub mod account;
pub mod department;
pub mod health;
pub mod leave;
