//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use autoserve_api::{AppState, build_router};
use autoserve_core::config::AppConfig;
use autoserve_core::traits::MailMessage;
use autoserve_database::StoreManager;
use autoserve_entity::Role;
use autoserve_service::Registration;
use autoserve_service::mailer::MemoryMailer;

/// A strong password that clears the strength policy.
pub const PASSWORD: &str = "kx9#mQ2$vL8pW3nZ";

/// Test application backed by in-memory stores and a capturing mailer.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
    /// Full application state, for seeding accounts directly.
    pub state: AppState,
    /// Captures outbound mail so tests can read reset tokens.
    pub mailer: Arc<MemoryMailer>,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a test application with adjusted configuration.
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.store.backend = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        adjust(&mut config);

        let mailer = Arc::new(MemoryMailer::new());
        let state = AppState::build(config, StoreManager::in_memory(), mailer.clone());
        let router = build_router(state.clone());

        Self {
            router,
            state,
            mailer,
        }
    }

    /// Register a customer through the public API and log it in,
    /// returning the bearer token and account ID.
    pub async fn register_customer(&self, email: &str) -> (String, Uuid) {
        let body = serde_json::json!({
            "email": email,
            "name": "Test Customer",
            "phone": "+421900111222",
            "password": PASSWORD,
        });

        let response = self
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let id = response.body["data"]["id"]
            .as_str()
            .and_then(|id| id.parse().ok())
            .expect("No user ID in registration response");
        let token = self.login(email, PASSWORD).await;
        (token, id)
    }

    /// Seed an admin account directly; there is no public route that
    /// creates one.
    pub async fn seed_admin(&self, email: &str) -> (String, Uuid) {
        let user = self
            .state
            .auth_service
            .register(
                Registration {
                    email: email.to_string(),
                    name: "Test Admin".to_string(),
                    phone: None,
                    password: PASSWORD.to_string(),
                },
                Role::Admin,
            )
            .await
            .expect("Failed to seed admin");
        let token = self.login(email, PASSWORD).await;
        (token, user.id)
    }

    /// Login through the API and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.request("POST", "/api/auth/login", Some(body), None).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create a booking for the given token, returning its ID.
    pub async fn create_booking(&self, token: &str) -> Uuid {
        let response = self
            .request("POST", "/api/bookings", Some(booking_body()), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Booking creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .and_then(|id| id.parse().ok())
            .expect("No booking ID in response")
    }

    /// Wait for the capturing mailer to hold at least `count` messages.
    pub async fn wait_for_mail(&self, count: usize) -> Vec<MailMessage> {
        for _ in 0..200 {
            let sent = self.mailer.sent().await;
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("expected {count} mail messages, got {:?}", self.mailer.sent().await);
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Make a request with a verbatim `Authorization` header value.
    pub async fn request_with_raw_authorization(
        &self,
        method: &str,
        path: &str,
        authorization: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", authorization)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestResponse {
    /// The machine-readable error code, if this is an error body.
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(|code| code.as_str())
    }
}

/// A well-formed booking creation body.
pub fn booking_body() -> Value {
    serde_json::json!({
        "service_id": Uuid::new_v4(),
        "service_name": "Oil change",
        "customer_name": "Test Customer",
        "phone": "+421900111222",
        "email": "customer@example.com",
        "vehicle_number": "BA-123XY",
        "vehicle_model": "Skoda Octavia",
        "scheduled_date": "2025-03-14",
        "scheduled_time": "10:30:00",
        "notes": "Please check the brakes too"
    })
}

/// Extract the raw reset token from a reset mail body.
pub fn token_from_mail(message: &MailMessage) -> String {
    message
        .body
        .lines()
        .find(|line| line.contains("/reset-password/"))
        .and_then(|line| line.rsplit('/').next())
        .map(|token| token.trim().to_string())
        .expect("No reset link in mail body")
}
