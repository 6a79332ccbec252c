//! Core traits for pluggable collaborators.

pub mod mailer;

pub use mailer::{MailMessage, Mailer};
