use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use autoserve_core::{AppError, AppResult};
use autoserve_database::BookingStore;
use autoserve_entity::{Booking, BookingStatus, NewBooking};

use crate::context::{RequestContext, require_admin};

/// Customer-supplied booking details.
///
/// Deliberately has no owner field; the owner is always the
/// authenticated caller.
#[derive(Debug, Clone)]
pub struct BookingDetails {
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

/// Booking lifecycle operations.
///
/// Owns all visibility and transition rules. Customers create and read
/// their own bookings; admins see everything and are the only role that
/// moves bookings through the lifecycle or deletes them.
#[derive(Debug, Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingStore>) -> Self {
        Self { bookings }
    }

    /// Create a booking owned by the caller. Every booking starts
    /// pending regardless of anything in the request.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        details: BookingDetails,
    ) -> AppResult<Booking> {
        let booking = self
            .bookings
            .insert(NewBooking {
                customer_id: ctx.user_id,
                service_id: details.service_id,
                service_name: details.service_name,
                customer_name: details.customer_name,
                phone: details.phone,
                email: details.email,
                vehicle_number: details.vehicle_number,
                vehicle_model: details.vehicle_model,
                scheduled_date: details.scheduled_date,
                scheduled_time: details.scheduled_time,
                notes: details.notes,
            })
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            customer_id = %ctx.user_id,
            "booking created"
        );
        Ok(booking)
    }

    /// Fetch one booking, enforcing owner-or-admin visibility.
    ///
    /// A customer asking for someone else's booking is told it is
    /// forbidden, not that it does not exist; the ID was valid and
    /// hiding that would not survive the list endpoints anyway.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        if !ctx.is_admin() && booking.customer_id != ctx.user_id {
            return Err(AppError::forbidden("You do not have access to this booking"));
        }
        Ok(booking)
    }

    /// The caller's own bookings, newest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<Booking>> {
        self.bookings.list_by_customer(ctx.user_id).await
    }

    /// Every booking in the system, newest first. Admin only.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<Booking>> {
        require_admin(ctx)?;
        self.bookings.list_all().await
    }

    /// Move a booking one step along its lifecycle. Admin only.
    ///
    /// The status swap is a store-level compare-and-set keyed on the
    /// status this method just read, so two admins racing on the same
    /// booking cannot both win: the loser gets an illegal-transition
    /// error computed against the fresh status.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: BookingStatus,
    ) -> AppResult<Booking> {
        // Role first, so non-admins cannot probe which IDs exist.
        require_admin(ctx)?;

        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        if !booking.status.can_transition_to(next) {
            return Err(illegal(booking.status, next));
        }

        match self.bookings.set_status(id, booking.status, next).await? {
            Some(updated) => {
                tracing::info!(
                    booking_id = %id,
                    from = %booking.status,
                    to = %next,
                    "booking status changed"
                );
                Ok(updated)
            }
            // The CAS only misses when the status changed between the
            // read and the swap, so this branch is exclusively the
            // concurrent-modification case.
            None => match self.bookings.find_by_id(id).await? {
                Some(current) => Err(AppError::illegal_transition(format!(
                    "Booking status changed concurrently; it is now {}",
                    current.status
                ))),
                None => Err(not_found()),
            },
        }
    }

    /// Remove a booking outright. Admin only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        require_admin(ctx)?;

        if !self.bookings.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(booking_id = %id, "booking deleted");
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::not_found("Booking not found")
}

fn illegal(from: BookingStatus, to: BookingStatus) -> AppError {
    AppError::illegal_transition(format!(
        "Cannot change booking status from {from} to {to}"
    ))
}
