//! Request and response DTOs.

pub mod request;
pub mod response;
pub mod rules;
