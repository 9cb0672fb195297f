//! Typed path parameter helpers.
//!
//! Path segments arrive as strings so a malformed id yields the
//! resource-specific message instead of Axum's generic rejection.

use uuid::Uuid;

use cuti_core::error::AppError;

use crate::dto::rules;

/// Parses a canonical lowercase UUID, failing with `message`.
pub fn parse_uuid(value: &str, message: &'static str) -> Result<Uuid, AppError> {
    if !rules::is_canonical_uuid(value) {
        return Err(AppError::validation(message));
    }
    Uuid::parse_str(value).map_err(|_| AppError::validation(message))
}

/// Checks a username taken from the path.
pub fn parse_username(value: &str) -> Result<&str, AppError> {
    rules::username(value).map_err(|e| {
        AppError::validation(
            e.message
                .map(|m| m.into_owned())
                .unwrap_or_else(|| "Username tidak sesuai format".to_string()),
        )
    })?;
    Ok(value)
}
