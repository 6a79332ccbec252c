use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use autoserve_core::{AppError, AppResult};

use super::claims::Claims;

/// Verifies bearer tokens and extracts their claims.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 5;
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Every verification failure collapses into the same unauthenticated
    /// error; the concrete reason is logged at debug level only, so the
    /// response never reveals whether a token was malformed, forged, or
    /// merely expired.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "bearer token rejected");
                AppError::unauthenticated("Invalid or expired token")
            })
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenIssuer;
    use autoserve_core::error::ErrorKind;
    use autoserve_entity::{Role, User};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user(role: Role) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "jo@example.com".to_string(),
            name: "Jo".to_string(),
            phone: None,
            password_hash: "$argon2id$test".to_string(),
            role,
            reset_token_digest: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let secret = "test-secret";
        let issuer = TokenIssuer::new(secret, 7);
        let verifier = TokenVerifier::new(secret);
        let user = sample_user(Role::Admin);

        let (token, expires_at) = issuer.issue(&user).unwrap();
        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp, expires_at.timestamp());
        assert!(claims.exp - claims.iat >= 7 * 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenIssuer::new("secret-a", 7);
        let verifier = TokenVerifier::new("secret-b");
        let (token, _) = issuer.issue(&sample_user(Role::Customer)).unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let verifier = TokenVerifier::new("test-secret");
        let err = verifier.verify("not.a.token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let secret = "test-secret";
        let issuer = TokenIssuer::new(secret, 7);
        let verifier = TokenVerifier::new(secret);
        let (token, _) = issuer.issue(&sample_user(Role::Customer)).unwrap();

        // Flip a character inside the payload segment.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let payload = parts[1].clone();
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{flipped}{}", &payload[1..]);
        let tampered = parts.join(".");

        let err = verifier.verify(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // A negative TTL backdates the expiry past the leeway window.
        let secret = "test-secret";
        let issuer = TokenIssuer::new(secret, -1);
        let verifier = TokenVerifier::new(secret);
        let (token, _) = issuer.issue(&sample_user(Role::Customer)).unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
