//! Application-wide result alias.

use crate::error::AppError;

/// Result type used across all AutoServe crates.
pub type AppResult<T> = Result<T, AppError>;
