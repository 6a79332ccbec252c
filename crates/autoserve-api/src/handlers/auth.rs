//! Registration, login, and the current-account endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use autoserve_entity::Role;
use autoserve_service::Registration;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, SessionResponse, UserResponse};
use crate::dto::validated;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    validated(&req)?;

    // Public registration always creates customer accounts; admin
    // accounts are provisioned out of band.
    let user = state
        .auth_service
        .register(
            Registration {
                email: req.email,
                name: req.name,
                phone: req.phone,
                password: req.password,
            },
            Role::Customer,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<SessionResponse>>> {
    validated(&req)?;
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}

/// `GET /api/auth/me`
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let account = state.auth_service.current_user(&user).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}
