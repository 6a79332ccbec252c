//! Booking endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use autoserve_entity::{Booking, BookingStatus};
use autoserve_service::require_admin;

use crate::dto::request::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validated;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// `POST /api/bookings`
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    validated(&req)?;
    let booking = state
        .booking_service
        .create(&user, req.into_details())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking))))
}

/// `GET /api/bookings/my-bookings`
pub async fn my_bookings(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = state.booking_service.list_mine(&user).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// `GET /api/bookings/all` (admin)
pub async fn all_bookings(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Booking>>>> {
    require_admin(&user)?;
    let bookings = state.booking_service.list_all(&user).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// `GET /api/bookings/{id}`
pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Booking>>> {
    let booking = state.booking_service.get(&user, id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// `PATCH /api/bookings/{id}/status` (admin)
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> ApiResult<Json<ApiResponse<Booking>>> {
    // Role before payload, so a customer probing this route gets 403
    // no matter what the body says.
    require_admin(&user)?;
    let next = req.status.parse::<BookingStatus>()?;
    let booking = state.booking_service.transition(&user, id, next).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// `DELETE /api/bookings/{id}` (admin)
pub async fn delete_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&user)?;
    state.booking_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Booking deleted"))))
}
