//! Shared application state.

use std::sync::Arc;

use autoserve_auth::{PasswordHasher, PasswordPolicy, TokenIssuer, TokenVerifier};
use autoserve_core::config::AppConfig;
use autoserve_core::traits::Mailer;
use autoserve_database::StoreManager;
use autoserve_service::{AuthService, BookingService, PasswordResetService};

/// Shared application state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<StoreManager>,
    pub verifier: Arc<TokenVerifier>,
    pub auth_service: Arc<AuthService>,
    pub reset_service: Arc<PasswordResetService>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wire every service over the given store and mailer.
    ///
    /// Shared by the server binary and the test harness so both run the
    /// exact same assembly.
    pub fn build(config: AppConfig, store: StoreManager, mailer: Arc<dyn Mailer>) -> Self {
        let hasher = PasswordHasher::new();
        let policy = PasswordPolicy::new(config.auth.password_min_length);
        let issuer = Arc::new(TokenIssuer::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_days,
        ));
        let verifier = Arc::new(TokenVerifier::new(&config.auth.jwt_secret));

        let auth_service = Arc::new(AuthService::new(
            store.users(),
            hasher.clone(),
            policy.clone(),
            issuer,
        ));
        let reset_service = Arc::new(PasswordResetService::new(
            store.users(),
            hasher,
            policy,
            mailer,
            config.auth.reset_token_ttl_minutes,
            config.mail.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(store.bookings()));

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            verifier,
            auth_service,
            reset_service,
            booking_service,
        }
    }
}
