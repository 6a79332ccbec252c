use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A vehicle-service booking.
///
/// Contact and vehicle details are snapshotted onto the booking at
/// creation time; later edits to the owning account do not rewrite
/// existing bookings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking ID.
    pub id: Uuid,
    /// The account that owns this booking.
    pub customer_id: Uuid,
    /// The service being booked.
    pub service_id: Uuid,
    /// Snapshot of the service name at booking time.
    pub service_name: String,
    /// Contact name for this booking.
    pub customer_name: String,
    /// Contact phone for this booking.
    pub phone: String,
    /// Contact email for this booking.
    pub email: Option<String>,
    /// Registration plate of the vehicle.
    pub vehicle_number: String,
    /// Make and model of the vehicle.
    pub vehicle_model: Option<String>,
    /// Requested service date.
    pub scheduled_date: NaiveDate,
    /// Requested service time slot.
    pub scheduled_time: NaiveTime,
    /// Free-form customer notes.
    pub notes: Option<String>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a booking.
///
/// Carries no status field: every booking starts out pending and the
/// store pins that on insert. The owner comes from the authenticated
/// caller, never from the request body.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub vehicle_number: String,
    pub vehicle_model: Option<String>,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_serializes_status_lowercase() {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            service_name: "Oil change".to_string(),
            customer_name: "Jo".to_string(),
            phone: "+421900111222".to_string(),
            email: None,
            vehicle_number: "BA-123XY".to_string(),
            vehicle_model: Some("Skoda Octavia".to_string()),
            scheduled_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            notes: None,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["scheduled_date"], "2025-03-14");
        assert_eq!(json["vehicle_number"], "BA-123XY");
    }
}
