use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use autoserve_entity::Role;

/// Claims carried by every bearer token.
///
/// This is the complete set; tokens never embed emails, names, or other
/// profile data, so profile edits do not invalidate tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID the token was issued to.
    pub sub: Uuid,
    /// Role snapshot at issue time.
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// The expiry as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is past its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
