use autoserve_core::{AppError, AppResult};

/// Password strength policy applied at registration and password reset.
///
/// Enforces a minimum length plus a zxcvbn strength estimate, so short
/// keyboard walks and dictionary words are rejected even when they meet
/// the length floor.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check a candidate password against the policy.
    pub fn check(&self, password: &str) -> AppResult<()> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak; use a longer or less predictable password",
            ));
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoserve_core::error::ErrorKind;

    #[test]
    fn test_rejects_short_password() {
        let policy = PasswordPolicy::new(8);
        let err = policy.check("aB3$x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_rejects_weak_but_long_password() {
        let policy = PasswordPolicy::new(8);
        assert!(policy.check("password1234").is_err());
        assert!(policy.check("qwertyuiop").is_err());
    }

    #[test]
    fn test_accepts_strong_password() {
        let policy = PasswordPolicy::new(8);
        assert!(policy.check("kx9#mQ2$vL8pW3nZ").is_ok());
        assert!(policy.check("correct staple battery horse 42").is_ok());
    }
}
