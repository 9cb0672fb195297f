//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{DataResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<DataResponse<HealthResponse>>) {
    let (status, code, database) = match state.db.health_check().await {
        Ok(true) => ("ok", StatusCode::OK, "connected"),
        Ok(false) | Err(_) => ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unreachable"),
    };

    (
        code,
        Json(DataResponse::new(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })),
    )
}
