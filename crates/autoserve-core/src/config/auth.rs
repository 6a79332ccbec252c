use serde::{Deserialize, Serialize};

/// Authentication and token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens.
    ///
    /// Must be overridden in any real deployment, e.g. via
    /// `AUTOSERVE_AUTH__JWT_SECRET`.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
    /// Password-reset token lifetime in minutes.
    #[serde(default = "default_reset_token_ttl_minutes")]
    pub reset_token_ttl_minutes: i64,
    /// Minimum accepted password length.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_reset_token_ttl_minutes() -> i64 {
    60
}

fn default_password_min_length() -> usize {
    8
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl_days(),
            reset_token_ttl_minutes: default_reset_token_ttl_minutes(),
            password_min_length: default_password_min_length(),
        }
    }
}
