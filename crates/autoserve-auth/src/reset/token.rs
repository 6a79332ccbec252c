use rand::Rng;
use sha2::{Digest, Sha256};

/// A freshly generated password-reset token.
///
/// The raw form is mailed to the account holder and never stored; only
/// the SHA-256 digest is persisted, so a leaked database snapshot cannot
/// be replayed into working reset links.
#[derive(Debug, Clone)]
pub struct ResetToken {
    /// The secret handed to the user, 64 lowercase hex characters.
    pub raw: String,
    /// SHA-256 hex digest of `raw`, the only form the store ever sees.
    pub digest: String,
}

impl ResetToken {
    /// Generate a token from 32 fresh random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        let raw = hex::encode(bytes);
        let digest = digest_token(&raw);
        Self { raw, digest }
    }
}

/// Digest a raw token the same way [`ResetToken::generate`] does.
///
/// Used when completing a reset to look up the stored digest for the
/// token the user presented.
pub fn digest_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_shape() {
        let token = ResetToken::generate();
        assert_eq!(token.raw.len(), 64);
        assert_eq!(token.digest.len(), 64);
        assert!(token.raw.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token.raw, token.digest);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let token = ResetToken::generate();
        assert_eq!(digest_token(&token.raw), token.digest);
    }

    #[test]
    fn test_tokens_are_unique() {
        let first = ResetToken::generate();
        let second = ResetToken::generate();
        assert_ne!(first.raw, second.raw);
    }

    #[test]
    fn test_digest_matches_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            digest_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
