//! Booking lifecycle and visibility rules.

mod service;

pub use service::{BookingDetails, BookingService};
