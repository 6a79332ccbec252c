use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use autoserve_core::{AppError, AppResult};
use autoserve_entity::{NewUser, User};

use super::map_store_err;
use crate::stores::UserStore;

/// PostgreSQL-backed user store.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, phone, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return AppError::duplicate_identity("Email is already registered");
                }
            }
            map_store_err(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_store_err)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_store_err)
    }

    async fn find_by_reset_digest(&self, digest: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE reset_token_digest = $1")
            .bind(digest)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_store_err)
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        digest: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET reset_token_digest = $2, reset_token_expires_at = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(digest)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_store_err)?;
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: Uuid, digest: &str) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET reset_token_digest = NULL, reset_token_expires_at = NULL, updated_at = NOW()
            WHERE id = $1 AND reset_token_digest = $2
            "#,
        )
        .bind(user_id)
        .bind(digest)
        .execute(&self.pool)
        .await
        .map_err(map_store_err)?;
        Ok(())
    }

    async fn consume_reset_token(
        &self,
        digest: &str,
        new_password_hash: &str,
    ) -> AppResult<bool> {
        // Single conditional UPDATE; the WHERE clause is the whole
        // single-use guarantee.
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2,
                reset_token_digest = NULL,
                reset_token_expires_at = NULL,
                updated_at = NOW()
            WHERE reset_token_digest = $1 AND reset_token_expires_at > NOW()
            "#,
        )
        .bind(digest)
        .bind(new_password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_store_err)?;

        Ok(result.rows_affected() == 1)
    }
}
