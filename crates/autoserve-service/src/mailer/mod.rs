//! Mailer implementations.
//!
//! There is no SMTP integration here; deployments front the platform
//! with a relay and the development and test setups want the log and
//! capture mailers anyway.

mod log;
mod memory;

pub use log::LogMailer;
pub use memory::MemoryMailer;
