use serde::{Deserialize, Serialize};

/// Outbound mail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// The `From:` address on outbound mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Base URL the password-reset link points at; the raw token is
    /// appended as the final path segment.
    #[serde(default = "default_reset_url_base")]
    pub reset_url_base: String,
}

fn default_from_address() -> String {
    "no-reply@autoserve.local".to_string()
}

fn default_reset_url_base() -> String {
    "http://localhost:5173/reset-password".to_string()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from_address: default_from_address(),
            reset_url_base: default_reset_url_base(),
        }
    }
}
