use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered user account.
///
/// The email address is the login identity and is stored lowercased;
/// uniqueness is enforced by the store. Secret material is never
/// serialized out of the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: Uuid,
    /// Login identity, lowercased.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Argon2 password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Authorization role.
    pub role: Role,
    /// SHA-256 hex digest of the outstanding reset token, if any.
    #[serde(skip_serializing)]
    pub reset_token_digest: Option<String>,
    /// Expiry of the outstanding reset token. Set exactly when the
    /// digest is set.
    #[serde(skip_serializing)]
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the stored reset token is past its expiry at `now`.
    ///
    /// Returns `false` when no reset token is outstanding.
    pub fn reset_token_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.reset_token_expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}

/// Data required to create a user account.
///
/// The caller is responsible for lowercasing the email and hashing the
/// password before constructing this.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
}
