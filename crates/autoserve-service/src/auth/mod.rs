//! Registration and credential verification.

mod service;

pub use service::{AuthService, AuthenticatedSession, Registration, normalize_email};
