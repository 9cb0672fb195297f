//! RBAC route layers for role-based route guarding.
//!
//! These check the role carried by the token before the handler reads the
//! request body. Services re-check against the stored account where the
//! current role matters.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use cuti_auth::rbac::enforcer::ACCESS_DENIED;
use cuti_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Route layer admitting only ADMIN tokens.
pub async fn admin_only(
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_admin(&auth)?;
    Ok(next.run(request).await)
}

/// Route layer admitting only MANAJER tokens.
pub async fn manager_only(
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_manager(&auth)?;
    Ok(next.run(request).await)
}

/// Checks that the authenticated user has the ADMIN role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden(ACCESS_DENIED))
    }
}

/// Checks that the authenticated user has the MANAJER role.
pub fn require_manager(auth: &AuthUser) -> Result<(), AppError> {
    if auth.is_manager() {
        Ok(())
    } else {
        Err(AppError::forbidden(ACCESS_DENIED))
    }
}
