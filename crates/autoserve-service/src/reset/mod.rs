//! Password-reset flow.

mod service;

pub use service::PasswordResetService;
