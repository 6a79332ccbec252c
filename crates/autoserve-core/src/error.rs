//! Unified application error types for AutoServe.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// No valid bearer token accompanied the request.
    Unauthenticated,
    /// Login credentials did not match any account.
    InvalidCredentials,
    /// The caller is authenticated but lacks the required role or ownership.
    Forbidden,
    /// The registration identity is already taken.
    DuplicateIdentity,
    /// The password-reset token is unknown or already consumed.
    ResetTokenInvalid,
    /// The password-reset token is past its expiry window.
    ResetTokenExpired,
    /// The requested booking status change is not a legal transition.
    IllegalTransition,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// The persistence layer is temporarily unreachable. Retryable.
    StoreUnavailable,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::DuplicateIdentity => write!(f, "DUPLICATE_IDENTITY"),
            Self::ResetTokenInvalid => write!(f, "RESET_TOKEN_INVALID"),
            Self::ResetTokenExpired => write!(f, "RESET_TOKEN_EXPIRED"),
            Self::IllegalTransition => write!(f, "ILLEGAL_TRANSITION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::StoreUnavailable => write!(f, "STORE_UNAVAILABLE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl ErrorKind {
    /// Whether a caller may retry the failed request unchanged.
    ///
    /// Only store outages are transient; every other kind is terminal
    /// for the request that produced it.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable)
    }
}

/// The unified application error used throughout AutoServe.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a duplicate-identity error.
    pub fn duplicate_identity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateIdentity, message)
    }

    /// Create a reset-token-invalid error.
    pub fn reset_token_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResetTokenInvalid, message)
    }

    /// Create a reset-token-expired error.
    pub fn reset_token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResetTokenExpired, message)
    }

    /// Create an illegal-transition error.
    pub fn illegal_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalTransition, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a store-unavailable error.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
