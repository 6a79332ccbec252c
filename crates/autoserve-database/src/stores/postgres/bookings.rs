use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use autoserve_core::AppResult;
use autoserve_entity::{Booking, BookingStatus, NewBooking};

use super::map_store_err;
use crate::stores::BookingStore;

/// PostgreSQL-backed booking store.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking> {
        // Status is omitted deliberately; the column default pins every
        // new booking to 'pending'.
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, customer_id, service_id, service_name, customer_name,
                phone, email, vehicle_number, vehicle_model,
                scheduled_date, scheduled_time, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.customer_id)
        .bind(booking.service_id)
        .bind(&booking.service_name)
        .bind(&booking.customer_name)
        .bind(&booking.phone)
        .bind(&booking.email)
        .bind(&booking.vehicle_number)
        .bind(&booking.vehicle_model)
        .bind(booking.scheduled_date)
        .bind(booking.scheduled_time)
        .bind(&booking.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_store_err)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_store_err)
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_store_err)
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_store_err)
    }

    async fn set_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        // Conditional UPDATE; a concurrent transition that changed the
        // status first makes this a no-op returning no row.
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_store_err)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_store_err)?;
        Ok(result.rows_affected() > 0)
    }
}
