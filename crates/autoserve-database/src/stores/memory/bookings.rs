use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use autoserve_core::AppResult;
use autoserve_entity::{Booking, BookingStatus, NewBooking};

use crate::stores::BookingStore;

/// In-memory booking store.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: DashMap<Uuid, Booking>,
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking> {
        let now = Utc::now();
        let record = Booking {
            id: Uuid::new_v4(),
            customer_id: booking.customer_id,
            service_id: booking.service_id,
            service_name: booking.service_name,
            customer_name: booking.customer_name,
            phone: booking.phone,
            email: booking.email,
            vehicle_number: booking.vehicle_number,
            vehicle_model: booking.vehicle_model,
            scheduled_date: booking.scheduled_date,
            scheduled_time: booking.scheduled_time,
            notes: booking.notes,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.clone()))
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|entry| entry.customer_id == customer_id)
            .map(|entry| entry.clone())
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> =
            self.bookings.iter().map(|entry| entry.clone()).collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn set_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let mut entry = match self.bookings.get_mut(&id) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        // The entry lock makes check-then-set atomic, matching the
        // conditional UPDATE of the PostgreSQL store.
        if entry.status != expected {
            return Ok(None);
        }

        entry.status = next;
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.bookings.remove(&id).is_some())
    }
}
