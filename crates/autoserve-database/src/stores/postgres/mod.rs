//! PostgreSQL store implementations.

mod bookings;
mod users;

pub use bookings::PgBookingStore;
pub use users::PgUserStore;

use autoserve_core::AppError;
use autoserve_core::error::ErrorKind;

/// Map a sqlx error onto the application taxonomy.
///
/// Pool exhaustion and transport failures are the retryable outage
/// class; everything else is an internal fault in the query or schema.
pub(crate) fn map_store_err(err: sqlx::Error) -> AppError {
    let unavailable = matches!(
        err,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    );
    if unavailable {
        AppError::with_source(ErrorKind::StoreUnavailable, "Store is unavailable", err)
    } else {
        AppError::with_source(ErrorKind::Internal, "Store query failed", err)
    }
}
