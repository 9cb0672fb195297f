//! Department handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateDepartmentRequest, DepartmentSearchQuery, UpdateDepartmentRequest};
use crate::dto::response::{DataResponse, DepartmentResponse, PagedResponse};
use crate::dto::rules::DEPARTMENT_ID_FORMAT;
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/v1/departement
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<DepartmentResponse>>)> {
    let department = state.department_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(department.into())),
    ))
}

/// GET /api/v1/departement/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<DepartmentResponse>>> {
    let id = parse_uuid(&id, DEPARTMENT_ID_FORMAT)?;
    let department = state.department_service.get(&auth, id).await?;
    Ok(Json(DataResponse::new(department.into())))
}

/// PATCH /api/v1/departement/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateDepartmentRequest>,
) -> ApiResult<Json<DataResponse<DepartmentResponse>>> {
    let id = parse_uuid(&id, DEPARTMENT_ID_FORMAT)?;
    let department = state
        .department_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(DataResponse::new(department.into())))
}

/// DELETE /api/v1/departement/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<&'static str>>> {
    let id = parse_uuid(&id, DEPARTMENT_ID_FORMAT)?;
    state.department_service.remove(&auth, id).await?;
    Ok(Json(DataResponse::new("OK")))
}

/// GET /api/v1/departement and /api/v1/departement/search
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DepartmentSearchQuery>,
) -> ApiResult<Json<PagedResponse<DepartmentResponse>>> {
    let (filter, page) = query.into_parts();
    let result = state.department_service.search(filter, page).await?;
    Ok(Json(result.into()))
}
