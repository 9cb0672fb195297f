//! Leave request handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::{LeaveSearchQuery, SaveDraftRequest, UpdateDraftRequest, VerifyLeaveRequest};
use crate::dto::response::{
    DataResponse, LeaveItemResponse, LeaveResponse, PagedResponse, VerifyResponse,
};
use crate::dto::rules::LEAVE_ID_FORMAT;
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/v1/leave/draft
pub async fn save_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SaveDraftRequest>,
) -> ApiResult<Json<DataResponse<LeaveResponse>>> {
    let leave = state
        .leave_service
        .save_draft(&auth, req.into_input()?)
        .await?;
    Ok(Json(DataResponse::new(leave.into())))
}

/// PUT /api/v1/leave/{leaveId}/submit
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(leave_id): Path<String>,
) -> ApiResult<Json<DataResponse<LeaveResponse>>> {
    let id = parse_uuid(&leave_id, LEAVE_ID_FORMAT)?;
    let leave = state.leave_service.submit(&auth, id).await?;
    Ok(Json(DataResponse::new(leave.into())))
}

/// PUT /api/v1/leave/{leaveId}/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(leave_id): Path<String>,
    ValidatedJson(req): ValidatedJson<VerifyLeaveRequest>,
) -> ApiResult<Json<DataResponse<VerifyResponse>>> {
    let id = parse_uuid(&leave_id, LEAVE_ID_FORMAT)?;
    let decision = req.decision()?;

    let leave = state.leave_service.verify(&auth, id, decision).await?;
    Ok(Json(DataResponse::new(VerifyResponse {
        message: decision.message().to_string(),
        leave: leave.into(),
    })))
}

/// PUT /api/v1/leave/{leaveId}/update
pub async fn update_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(leave_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateDraftRequest>,
) -> ApiResult<Json<DataResponse<LeaveResponse>>> {
    let id = parse_uuid(&leave_id, LEAVE_ID_FORMAT)?;
    let leave = state
        .leave_service
        .update_draft(&auth, id, req.into_changes()?)
        .await?;
    Ok(Json(DataResponse::new(leave.into())))
}

/// DELETE /api/v1/leave/{leaveId}
pub async fn remove_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(leave_id): Path<String>,
) -> ApiResult<Json<DataResponse<&'static str>>> {
    let id = parse_uuid(&leave_id, LEAVE_ID_FORMAT)?;
    state.leave_service.remove_draft(&auth, id).await?;
    Ok(Json(DataResponse::new("Draft berhasil dihapus")))
}

/// GET /api/v1/leave
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<LeaveSearchQuery>,
) -> ApiResult<Json<PagedResponse<LeaveItemResponse>>> {
    let (status, page) = query.into_parts()?;
    let result = state.leave_service.search(&auth, status, page).await?;
    Ok(Json(result.into()))
}
