//! Unified application error types for Cuti.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. The HTTP layer translates the
//! [`ErrorKind`] into a status code at the boundary.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// A duplicate or still-referenced resource.
    Conflict,
    /// Presented credentials were rejected (login or re-authentication).
    Authentication,
    /// The requested resource was not found.
    NotFound,
    /// The caller is authenticated but not allowed to perform the action.
    Forbidden,
    /// The bearer token is missing or invalid.
    Unauthorized,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl ErrorKind {
    /// Whether this kind represents a server-side failure.
    pub fn is_server_error(&self) -> bool {
        match self {
            Self::Internal | Self::Database | Self::Configuration | Self::Serialization => true,
            Self::Validation
            | Self::Conflict
            | Self::Authentication
            | Self::NotFound
            | Self::Forbidden
            | Self::Unauthorized => false,
        }
    }
}

impl ErrorKind {
    /// Stable upper-case label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Authentication => "AUTHENTICATION",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified application error used throughout Cuti.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Field-level messages, one per violated rule.
    pub details: Vec<String>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error carrying every violated field message.
    ///
    /// The first message doubles as the summary.
    pub fn validation_fields(details: Vec<String>) -> Self {
        let message = details
            .first()
            .cloned()
            .unwrap_or_else(|| "Data tidak valid".to_string());
        Self {
            kind: ErrorKind::Validation,
            message,
            details,
            source: None,
        }
    }
}

/// One shorthand constructor per client-facing or server kind.
macro_rules! kind_constructors {
    ($($name:ident => $kind:ident),* $(,)?) => {
        impl AppError {
            $(
                pub fn $name(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

kind_constructors! {
    validation => Validation,
    conflict => Conflict,
    authentication => Authentication,
    not_found => NotFound,
    forbidden => Forbidden,
    unauthorized => Unauthorized,
    internal => Internal,
    database => Database,
    configuration => Configuration,
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
