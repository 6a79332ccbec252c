//! # autoserve-service
//!
//! Business logic for AutoServe. Services own every domain rule: who may
//! see or mutate a booking, how credentials are verified, and how the
//! password-reset lifecycle runs. The HTTP layer above translates wire
//! requests into service calls; the stores below only persist.

pub mod auth;
pub mod booking;
pub mod context;
pub mod mailer;
pub mod reset;

pub use auth::{AuthService, AuthenticatedSession, Registration};
pub use booking::{BookingDetails, BookingService};
pub use context::{RequestContext, require_admin};
pub use reset::PasswordResetService;
