//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use autoserve_core::config::DatabaseConfig;
use autoserve_core::error::ErrorKind;
use autoserve_core::{AppError, AppResult};

/// Database connection pool wrapper.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        tracing::info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            "Connecting to database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to connect to database", e)
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify the database answers queries.
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Database health check failed", e)
            })?;
        Ok(())
    }
}

/// Mask the password portion of a connection URL for logging.
fn mask_password(url: &str) -> String {
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];
        if let Some(at) = rest.find('@') {
            let credentials = &rest[..at];
            if let Some(colon) = credentials.find(':') {
                return format!(
                    "{}{}:****{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &rest[at..]
                );
            }
        }
    }
    url.to_string()
}
