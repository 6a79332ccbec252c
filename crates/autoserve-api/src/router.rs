//! Router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, patch, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use autoserve_core::config::CorsConfig;

use crate::handlers;
use crate::middleware::request_logging;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/bookings", booking_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me))
        .route(
            "/password-reset/request",
            post(handlers::password_reset::request_reset),
        )
        .route(
            "/password-reset/complete",
            post(handlers::password_reset::complete_reset),
        )
}

fn booking_routes() -> Router<AppState> {
    // The literal routes are registered before the `{id}` capture so
    // `/my-bookings` and `/all` never parse as booking IDs.
    Router::new()
        .route("/", post(handlers::booking::create_booking))
        .route("/my-bookings", get(handlers::booking::my_bookings))
        .route("/all", get(handlers::booking::all_bookings))
        .route(
            "/{id}",
            get(handlers::booking::get_booking).delete(handlers::booking::delete_booking),
        )
        .route("/{id}/status", patch(handlers::booking::update_status))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
