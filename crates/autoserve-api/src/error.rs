//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use autoserve_core::AppError;
use autoserve_core::error::ErrorKind;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying [`AppError`] across the HTTP boundary.
///
/// Handlers return this so `?` on any `AppResult` converts
/// automatically; the wrapper exists because `IntoResponse` cannot be
/// implemented for a type from another crate.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthenticated | ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::DuplicateIdentity => StatusCode::CONFLICT,
            ErrorKind::ResetTokenInvalid
            | ErrorKind::ResetTokenExpired
            | ErrorKind::IllegalTransition
            | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "request failed");
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::unauthenticated("x")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::invalid_credentials("x")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(AppError::forbidden("x")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(AppError::duplicate_identity("x")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::illegal_transition("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::reset_token_expired("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::store_unavailable("x")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_of(AppError::not_found("x")), StatusCode::NOT_FOUND);
    }
}
