//! Account handlers: registration, login, logout and profile management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;

use crate::dto::request::{
    AccountSearchQuery, AdminUpdateRequest, LoginRequest, RegisterRequest, UpdateCurrentRequest,
};
use crate::dto::response::{
    AccountResponse, DataResponse, PagedResponse, ProfileResponse, RegisteredAccountResponse,
};
use crate::error::ApiResult;
use crate::extractors::path::parse_username;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Response carrying a freshly issued token in the `Authorization` header.
type WithToken<T> = ([(axum::http::HeaderName, String); 1], Json<DataResponse<T>>);

fn with_token<T>(token: &str, data: T) -> WithToken<T> {
    (
        [(AUTHORIZATION, format!("Bearer {token}"))],
        Json(DataResponse::new(data)),
    )
}

/// POST /api/v1/user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<RegisteredAccountResponse>>)> {
    let account = state
        .account_service
        .register(req.into_registration()?)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(account.into()))))
}

/// POST /api/v1/user/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<WithToken<&'static str>> {
    let (_, token) = state
        .account_service
        .login(&req.username, &req.password)
        .await?;
    Ok(with_token(&token, "Berhasil login"))
}

/// PATCH /api/v1/user/current
pub async fn update_current(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateCurrentRequest>,
) -> ApiResult<WithToken<ProfileResponse>> {
    let (account, token) = state
        .account_service
        .update_self(&auth, req.into_self_update()?)
        .await?;
    Ok(with_token(&token, account.into()))
}

/// GET /api/v1/user/current/logout
///
/// Tokens are stateless; the client is told to drop its copy.
pub async fn logout(
    _auth: AuthUser,
) -> ([(axum::http::HeaderName, &'static str); 1], Json<DataResponse<&'static str>>) {
    (
        [(AUTHORIZATION, "")],
        Json(DataResponse::new("Berhasil logout")),
    )
}

/// GET /api/v1/user/search
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<AccountSearchQuery>,
) -> ApiResult<Json<PagedResponse<AccountResponse>>> {
    let (filter, page) = query.into_parts()?;
    let result = state
        .admin_account_service
        .search(&auth, filter, page)
        .await?;
    Ok(Json(result.into()))
}

/// PATCH /api/v1/user/{userId}
pub async fn update_by_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<AdminUpdateRequest>,
) -> ApiResult<Json<DataResponse<AccountResponse>>> {
    let target = parse_username(&user_id)?;
    let account = state
        .admin_account_service
        .update_account(&auth, target, req.into_admin_update()?)
        .await?;
    Ok(Json(DataResponse::new(account.into())))
}
