//! Database schema migrations.

use sqlx::PgPool;

use autoserve_core::error::ErrorKind;
use autoserve_core::{AppError, AppResult};

/// Run all pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    tracing::info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Database migration failed", e))?;

    tracing::info!("Database migrations complete");
    Ok(())
}
