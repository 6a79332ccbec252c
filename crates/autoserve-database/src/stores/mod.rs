//! Backend-neutral store traits and their implementations.
//!
//! Services depend only on these traits; [`crate::StoreManager`] decides
//! at startup whether PostgreSQL or the in-memory backend sits behind
//! them.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use autoserve_core::AppResult;
use autoserve_entity::{Booking, BookingStatus, NewBooking, NewUser, User};

/// Persistence operations over user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new account.
    ///
    /// Fails with a duplicate-identity error when the email is already
    /// registered; the uniqueness check and the insert are atomic.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Fetch an account by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Fetch an account by its lowercased email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Fetch the account holding the given reset-token digest.
    async fn find_by_reset_digest(&self, digest: &str) -> AppResult<Option<User>>;

    /// Store a reset-token digest and its expiry on an account,
    /// replacing any previous token.
    async fn set_reset_token(
        &self,
        user_id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Clear the reset-token fields, but only while they still hold
    /// `digest`. A token replaced by a newer request is left alone.
    async fn clear_reset_token(&self, user_id: Uuid, digest: &str) -> AppResult<()>;

    /// Atomically swap the password hash and clear the reset-token
    /// fields of the account holding an unexpired `digest`.
    ///
    /// Returns `false` when no such account exists, which covers a
    /// token that was never issued, already consumed, or expired.
    /// Under concurrent completion attempts exactly one caller
    /// observes `true`.
    async fn consume_reset_token(&self, digest: &str, new_password_hash: &str)
    -> AppResult<bool>;
}

/// Persistence operations over bookings.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new booking. The stored status is always pending.
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking>;

    /// Fetch a booking by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// All bookings owned by one customer, newest first.
    async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Booking>>;

    /// All bookings in the system, newest first.
    async fn list_all(&self) -> AppResult<Vec<Booking>>;

    /// Compare-and-set the status of a booking.
    ///
    /// The update applies only while the stored status still equals
    /// `expected`; otherwise the booking is untouched and `None` is
    /// returned. Concurrent transitions therefore serialize: exactly
    /// one wins and every loser sees `None`.
    async fn set_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> AppResult<Option<Booking>>;

    /// Delete a booking. Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
