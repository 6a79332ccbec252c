use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use autoserve_core::AppError;
use autoserve_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for the authenticated caller.
///
/// Parses the `Authorization: Bearer <token>` header and verifies the
/// token before any handler logic runs. Every failure here is a 401;
/// role checks come later and are the only source of 403, so a caller
/// with a bad token can never learn whether the route would have
/// required more privilege.
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
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| missing("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| missing("Authorization header must be a bearer token"))?;

        let claims = state.verifier.verify(token)?;
        Ok(Self(RequestContext::new(claims.sub, claims.role)))
    }
}

fn missing(message: &str) -> ApiError {
    ApiError(AppError::unauthenticated(message))
}
