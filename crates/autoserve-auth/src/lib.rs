//! # autoserve-auth
//!
//! Credential and token primitives for AutoServe: Argon2 password hashing,
//! password strength policy, stateless bearer tokens, and single-use
//! password-reset tokens.

pub mod jwt;
pub mod password;
pub mod reset;

pub use jwt::{Claims, TokenIssuer, TokenVerifier};
pub use password::{PasswordHasher, PasswordPolicy};
pub use reset::{ResetToken, digest_token};
