//! Application configuration loaded from layered sources.
//!
//! Configuration is assembled from, in order of increasing precedence:
//!
//! 1. `config/default.toml`
//! 2. `config/{environment}.toml` (e.g. `config/production.toml`)
//! 3. Environment variables prefixed with `AUTOSERVE_` using `__` as the
//!    section separator, e.g. `AUTOSERVE_AUTH__JWT_SECRET`.
//!
//! Every section carries defaults so the server boots without any file at
//! all, which is how the test suite constructs its configuration.

mod auth;
mod logging;
mod mail;
mod server;
mod store;

pub use auth::AuthConfig;
pub use logging::LoggingConfig;
pub use mail::MailConfig;
pub use server::{CorsConfig, ServerConfig};
pub use store::{DatabaseConfig, StoreConfig};

use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Root configuration for the AutoServe server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence backend settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication and token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Outbound mail settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    pub fn load(env: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AUTOSERVE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }
}
