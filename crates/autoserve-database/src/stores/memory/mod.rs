//! In-memory store implementations.
//!
//! Backed by `DashMap`; per-entry locks give the same atomicity the
//! PostgreSQL conditional UPDATEs provide. State lives and dies with
//! the process, which is exactly what the test suite wants.

mod bookings;
mod users;

pub use bookings::MemoryBookingStore;
pub use users::MemoryUserStore;
