//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/health`
///
/// Answers 503 when the store does not respond, which is what load
/// balancers key off.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<HealthResponse>>> {
    state.store.health_check().await?;

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.backend_name(),
    })))
}
