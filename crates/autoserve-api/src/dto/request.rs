//! Request bodies.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use autoserve_service::BookingDetails;

/// Body of `POST /api/auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of `POST /api/auth/password-reset/request`.
#[derive(Debug, Deserialize, Validate)]
pub struct RequestResetRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
}

/// Body of `POST /api/auth/password-reset/complete`.
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteResetRequest {
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub service_id: Uuid,
    #[validate(length(min = 1, max = 200, message = "Service name is required"))]
    pub service_name: String,
    #[validate(length(min = 1, max = 120, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, max = 40, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20, message = "Vehicle number is required"))]
    pub vehicle_number: String,
    pub vehicle_model: Option<String>,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    #[validate(length(max = 1000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    /// The service-layer view of this request; the owner is attached by
    /// the booking service from the authenticated caller.
    pub fn into_details(self) -> BookingDetails {
        BookingDetails {
            service_id: self.service_id,
            service_name: self.service_name,
            customer_name: self.customer_name,
            phone: self.phone,
            email: self.email,
            vehicle_number: self.vehicle_number,
            vehicle_model: self.vehicle_model,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            notes: self.notes,
        }
    }
}

/// Body of `PATCH /api/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// Target status as its lowercase wire name.
    pub status: String,
}
