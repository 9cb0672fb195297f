//! Route definitions for the Cuti HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit and request logging.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(user_routes(&state))
        .merge(department_routes(&state))
        .merge(leave_routes(&state))
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration, login, profile and admin account management
fn user_routes(state: &AppState) -> Router<AppState> {
    let admin = axum_middleware::from_fn_with_state(state.clone(), middleware::rbac::admin_only);

    Router::new()
        .route("/user", post(handlers::account::register))
        .route("/user/login", post(handlers::account::login))
        .route("/user/current", patch(handlers::account::update_current))
        .route("/user/current/logout", get(handlers::account::logout))
        .route(
            "/user/search",
            get(handlers::account::search).route_layer(admin.clone()),
        )
        .route(
            "/user/{userId}",
            patch(handlers::account::update_by_admin).route_layer(admin),
        )
}

/// Department directory. Reads are open, writes are ADMIN only.
fn department_routes(state: &AppState) -> Router<AppState> {
    let admin = axum_middleware::from_fn_with_state(state.clone(), middleware::rbac::admin_only);

    Router::new()
        .route(
            "/departement",
            get(handlers::department::search)
                .merge(post(handlers::department::create).route_layer(admin.clone())),
        )
        .route("/departement/search", get(handlers::department::search))
        .route(
            "/departement/{id}",
            get(handlers::department::get).merge(
                patch(handlers::department::update)
                    .delete(handlers::department::remove)
                    .route_layer(admin),
            ),
        )
}

/// Leave workflow
fn leave_routes(state: &AppState) -> Router<AppState> {
    let manager =
        axum_middleware::from_fn_with_state(state.clone(), middleware::rbac::manager_only);

    Router::new()
        .route("/leave", get(handlers::leave::search))
        .route("/leave/draft", post(handlers::leave::save_draft))
        .route("/leave/{leaveId}", delete(handlers::leave::remove_draft))
        .route("/leave/{leaveId}/submit", put(handlers::leave::submit))
        .route(
            "/leave/{leaveId}/verify",
            put(handlers::leave::verify).route_layer(manager),
        )
        .route("/leave/{leaveId}/update", put(handlers::leave::update_draft))
}

/// Liveness and database reachability
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
