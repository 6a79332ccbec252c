use async_trait::async_trait;

use autoserve_core::AppResult;
use autoserve_core::traits::{MailMessage, Mailer};

/// Mailer that writes messages to the log instead of delivering them.
///
/// The default mailer; reset links show up in the server log, which is
/// all local development needs.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: MailMessage) -> AppResult<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "outbound mail (log delivery)"
        );
        tracing::debug!(body = %message.body, "outbound mail body");
        Ok(())
    }
}
