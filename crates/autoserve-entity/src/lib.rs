//! # autoserve-entity
//!
//! Domain entities for the AutoServe booking platform: user accounts with
//! their roles, and service bookings with their lifecycle status.

pub mod booking;
pub mod user;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use user::{NewUser, Role, User};
