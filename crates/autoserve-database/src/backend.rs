//! Store backend selection.

use std::sync::Arc;

use autoserve_core::config::StoreConfig;
use autoserve_core::{AppError, AppResult};

use crate::connection::DatabasePool;
use crate::migration;
use crate::stores::memory::{MemoryBookingStore, MemoryUserStore};
use crate::stores::postgres::{PgBookingStore, PgUserStore};
use crate::stores::{BookingStore, UserStore};

/// Aggregates every store behind backend-neutral trait objects.
///
/// Built once at startup and shared through the application state.
#[derive(Debug, Clone)]
pub struct StoreManager {
    users: Arc<dyn UserStore>,
    bookings: Arc<dyn BookingStore>,
    backend: &'static str,
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Connect the backend named by configuration.
    ///
    /// The PostgreSQL backend connects its pool and runs pending
    /// migrations before returning.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        match config.backend.as_str() {
            "postgres" => {
                let db = DatabasePool::connect(&config.database).await?;
                migration::run_migrations(db.pool()).await?;
                tracing::info!("Store backend: postgres");

                Ok(Self {
                    users: Arc::new(PgUserStore::new(db.pool().clone())),
                    bookings: Arc::new(PgBookingStore::new(db.pool().clone())),
                    backend: "postgres",
                    pool: Some(db),
                })
            }
            "memory" => {
                tracing::warn!("Store backend: memory; data will not survive a restart");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown store backend: {other}"
            ))),
        }
    }

    /// Build a manager over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::default()),
            bookings: Arc::new(MemoryBookingStore::default()),
            backend: "memory",
            pool: None,
        }
    }

    /// Handle to the user store.
    pub fn users(&self) -> Arc<dyn UserStore> {
        self.users.clone()
    }

    /// Handle to the booking store.
    pub fn bookings(&self) -> Arc<dyn BookingStore> {
        self.bookings.clone()
    }

    /// The name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend
    }

    /// Verify the backend is reachable. The in-memory backend is
    /// always healthy.
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_backend_is_a_configuration_error() {
        let config = StoreConfig {
            backend: "cassandra".to_string(),
            ..StoreConfig::default()
        };
        let err = StoreManager::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, autoserve_core::error::ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_memory_backend_is_always_healthy() {
        let manager = StoreManager::in_memory();
        assert_eq!(manager.backend_name(), "memory");
        assert!(manager.health_check().await.is_ok());
    }
}
