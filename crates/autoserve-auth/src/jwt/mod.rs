//! Stateless bearer tokens.
//!
//! Tokens are HS256-signed JWTs carrying the account ID and role. There
//! is no server-side session state and no revocation list; a token is
//! valid until its expiry, so role changes take effect on the next login.

mod claims;
mod issuer;
mod verifier;

pub use claims::Claims;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
