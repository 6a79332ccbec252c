//! Password-reset endpoints.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{CompleteResetRequest, RequestResetRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validated;
use crate::error::ApiResult;
use crate::state::AppState;

/// `POST /api/auth/password-reset/request`
///
/// Answers 200 with the same body whether or not the email is
/// registered, so the endpoint cannot be used to probe for accounts.
pub async fn request_reset(
    State(state): State<AppState>,
    Json(req): Json<RequestResetRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    validated(&req)?;
    state.reset_service.request_reset(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "If that email is registered, a reset link is on its way",
    ))))
}

/// `POST /api/auth/password-reset/complete`
pub async fn complete_reset(
    State(state): State<AppState>,
    Json(req): Json<CompleteResetRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    validated(&req)?;
    state
        .reset_service
        .complete_reset(&req.token, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password has been reset",
    ))))
}
