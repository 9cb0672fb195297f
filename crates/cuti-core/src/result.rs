//! Convenience result type alias for Cuti.

use crate::error::AppError;

/// A specialized `Result` type for Cuti operations.
pub type AppResult<T> = Result<T, AppError>;
