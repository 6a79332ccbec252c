//! Request handlers.

pub mod auth;
pub mod booking;
pub mod health;
pub mod password_reset;
