//! Single-use password-reset tokens.

mod token;

pub use token::{ResetToken, digest_token};
