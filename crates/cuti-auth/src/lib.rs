//! # cuti-auth
//!
//! Authentication and authorization primitives for Cuti.
//!
//! ## Modules
//!
//! - `password` — Argon2id credential codec with expiry, and the password policy
//! - `jwt` — bearer token claims, issuing and verification
//! - `rbac` — role-to-permission mapping and enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
