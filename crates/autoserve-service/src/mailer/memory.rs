use async_trait::async_trait;
use tokio::sync::Mutex;

use autoserve_core::AppResult;
use autoserve_core::traits::{MailMessage, Mailer};

/// Mailer that captures every message for later inspection.
///
/// Used by tests to read reset tokens out of the "delivered" mail.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message sent so far, oldest first.
    pub async fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: MailMessage) -> AppResult<()> {
        self.sent.lock().await.push(message);
        Ok(())
    }
}
