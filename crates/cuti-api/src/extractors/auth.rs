//! `AuthUser` extractor: reads the bearer token, verifies it and exposes the
//! caller as a `RequestContext`.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use cuti_core::error::AppError;
use cuti_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Message for a missing or malformed `Authorization` header.
pub const MISSING_TOKEN: &str = "Unauthorized";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::unauthorized(MISSING_TOKEN))?;

        let claims = state.jwt_decoder.decode(bearer.token())?;
        Ok(AuthUser(RequestContext::from(claims)))
    }
}
