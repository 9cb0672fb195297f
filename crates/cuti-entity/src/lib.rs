//! # cuti-entity
//!
//! Domain entity models for Cuti. Every struct in this crate represents a
//! database row or a domain value object; row types additionally derive
//! `sqlx::FromRow`.

pub mod account;
pub mod department;
pub mod leave;
