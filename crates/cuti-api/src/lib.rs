//! # cuti-api
//!
//! HTTP API layer for Cuti built on Axum.
//!
//! Provides the REST endpoints for departments, accounts and leave requests,
//! the middleware stack (CORS, request logging, role guards), extractors,
//! DTOs and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
