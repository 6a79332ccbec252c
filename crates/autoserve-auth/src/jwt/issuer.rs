use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};

use autoserve_core::error::ErrorKind;
use autoserve_core::{AppError, AppResult};
use autoserve_entity::User;

use super::claims::Claims;

/// Issues signed bearer tokens for authenticated accounts.
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for the given account.
    ///
    /// Returns the encoded token and its expiry timestamp.
    pub fn issue(&self, user: &User) -> AppResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: user.id,
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign token", e))?;

        Ok((token, expires_at))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
