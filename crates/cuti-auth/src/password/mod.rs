//! Credential hashing and password policy enforcement.

pub mod hasher;
pub mod policy;

pub use hasher::{HashedCredential, PasswordHasher};
pub use policy::PasswordPolicy;
