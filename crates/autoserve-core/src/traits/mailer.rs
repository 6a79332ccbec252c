//! Outbound mail abstraction.

use async_trait::async_trait;

use crate::result::AppResult;

/// A fully composed outbound mail message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Trait for outbound mail delivery.
///
/// Implementations must be thread-safe. Delivery failures are reported
/// through the returned result; callers decide whether a failure is fatal
/// for the surrounding operation.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a single message.
    async fn send(&self, message: MailMessage) -> AppResult<()>;
}
