use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use autoserve_core::{AppError, AppResult};
use autoserve_entity::{NewUser, User};

use crate::stores::UserStore;

/// In-memory user store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    by_id: DashMap<Uuid, User>,
    email_index: DashMap<String, Uuid>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let id = Uuid::new_v4();

        // Claiming the email slot first makes duplicate detection and
        // the insert a single atomic step.
        match self.email_index.entry(user.email.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::duplicate_identity("Email is already registered"));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let now = Utc::now();
        let record = User {
            id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            password_hash: user.password_hash,
            role: user.role,
            reset_token_digest: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        };
        self.by_id.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.by_id.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let id = match self.email_index.get(email) {
            Some(entry) => *entry,
            None => return Ok(None),
        };
        Ok(self.by_id.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_reset_digest(&self, digest: &str) -> AppResult<Option<User>> {
        Ok(self
            .by_id
            .iter()
            .find(|entry| entry.reset_token_digest.as_deref() == Some(digest))
            .map(|entry| entry.clone()))
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(mut entry) = self.by_id.get_mut(&user_id) {
            entry.reset_token_digest = Some(digest.to_string());
            entry.reset_token_expires_at = Some(expires_at);
            entry.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: Uuid, digest: &str) -> AppResult<()> {
        if let Some(mut entry) = self.by_id.get_mut(&user_id) {
            if entry.reset_token_digest.as_deref() == Some(digest) {
                entry.reset_token_digest = None;
                entry.reset_token_expires_at = None;
                entry.updated_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        digest: &str,
        new_password_hash: &str,
    ) -> AppResult<bool> {
        let id = match self
            .by_id
            .iter()
            .find(|entry| entry.reset_token_digest.as_deref() == Some(digest))
        {
            Some(entry) => entry.id,
            None => return Ok(false),
        };

        let mut entry = match self.by_id.get_mut(&id) {
            Some(entry) => entry,
            None => return Ok(false),
        };

        // Re-check under the entry lock; a concurrent consume may have
        // won between the scan and here.
        let now = Utc::now();
        let still_valid = entry.reset_token_digest.as_deref() == Some(digest)
            && entry.reset_token_expires_at.is_some_and(|t| t > now);
        if !still_valid {
            return Ok(false);
        }

        entry.password_hash = new_password_hash.to_string();
        entry.reset_token_digest = None;
        entry.reset_token_expires_at = None;
        entry.updated_at = now;
        Ok(true)
    }
}
