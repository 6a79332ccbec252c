//! AutoServe server binary.
//!
//! Loads configuration, connects the store backend, wires the services,
//! and serves the API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use autoserve_api::{AppState, build_router};
use autoserve_core::config::AppConfig;
use autoserve_core::error::ErrorKind;
use autoserve_core::{AppError, AppResult};
use autoserve_database::StoreManager;
use autoserve_service::mailer::LogMailer;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

/// Load layered configuration; `AUTOSERVE_ENV` picks the overlay file.
fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("AUTOSERVE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing with the configured level and format.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    let store = StoreManager::connect(&config.store).await?;

    let bind_address = config.server.bind_address();
    let state = AppState::build(config, store, Arc::new(LogMailer));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to bind {bind_address}"),
            e,
        )
    })?;

    tracing::info!(address = %bind_address, "AutoServe listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
