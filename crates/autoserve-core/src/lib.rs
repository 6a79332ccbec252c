//! # autoserve-core
//!
//! Core crate for the AutoServe booking platform. Contains configuration
//! schemas, the mail collaborator trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AutoServe crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
