//! Service booking entity and lifecycle status.

mod model;
mod status;

pub use model::{Booking, NewBooking};
pub use status::BookingStatus;
