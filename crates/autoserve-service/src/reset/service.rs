use std::sync::Arc;

use chrono::{Duration, Utc};

use autoserve_auth::{PasswordHasher, PasswordPolicy, ResetToken, digest_token};
use autoserve_core::config::MailConfig;
use autoserve_core::traits::{MailMessage, Mailer};
use autoserve_core::{AppError, AppResult};
use autoserve_database::UserStore;
use autoserve_entity::User;

use crate::auth::normalize_email;

/// The two-step password-reset flow.
///
/// Step one mails a single-use token; step two trades the token for a
/// new password. The store only ever holds token digests, and the flow
/// never admits whether an email is registered.
#[derive(Debug, Clone)]
pub struct PasswordResetService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
    mailer: Arc<dyn Mailer>,
    token_ttl: Duration,
    mail: MailConfig,
}

impl PasswordResetService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        policy: PasswordPolicy,
        mailer: Arc<dyn Mailer>,
        token_ttl_minutes: i64,
        mail: MailConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            mailer,
            token_ttl: Duration::minutes(token_ttl_minutes),
            mail,
        }
    }

    /// Begin a reset for the given email.
    ///
    /// Succeeds identically whether or not the email is registered.
    /// For a registered account a fresh token replaces any previous
    /// one, and the mail is sent from a detached task so delivery
    /// latency and delivery failures never shape the response.
    pub async fn request_reset(&self, email: &str) -> AppResult<()> {
        let email = normalize_email(email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("password reset requested for unknown email");
                return Ok(());
            }
        };

        let token = ResetToken::generate();
        let expires_at = Utc::now() + self.token_ttl;
        self.users
            .set_reset_token(user.id, &token.digest, expires_at)
            .await?;

        tracing::info!(user_id = %user.id, "password reset token issued");

        let message = self.compose(&user, &token.raw);
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(message).await {
                tracing::error!(error = %e, "failed to send password reset mail");
            }
        });

        Ok(())
    }

    /// Trade a raw reset token for a new password.
    ///
    /// The final swap is a store-level conditional update, so under
    /// concurrent completion attempts exactly one succeeds and the rest
    /// fail with an invalid-token error.
    pub async fn complete_reset(&self, raw_token: &str, new_password: &str) -> AppResult<()> {
        let digest = digest_token(raw_token);

        let user = self
            .users
            .find_by_reset_digest(&digest)
            .await?
            .ok_or_else(invalid_token)?;

        if user.reset_token_expired_at(Utc::now()) {
            // Expired tokens are cleared on first touch so the stale
            // digest cannot be probed again.
            self.users.clear_reset_token(user.id, &digest).await?;
            return Err(AppError::reset_token_expired("Reset token has expired"));
        }

        self.policy.check(new_password)?;
        let new_hash = self.hasher.hash(new_password)?;

        if !self.users.consume_reset_token(&digest, &new_hash).await? {
            return Err(invalid_token());
        }

        tracing::info!(user_id = %user.id, "password reset completed");
        Ok(())
    }

    fn compose(&self, user: &User, raw_token: &str) -> MailMessage {
        let link = format!(
            "{}/{}",
            self.mail.reset_url_base.trim_end_matches('/'),
            raw_token
        );
        MailMessage {
            to: user.email.clone(),
            subject: "Reset your AutoServe password".to_string(),
            body: format!(
                "Hi {},\n\n\
                 A password reset was requested for your AutoServe account.\n\
                 Open the link below within {} minutes to choose a new password:\n\n\
                 {}\n\n\
                 If you did not request this, you can ignore this message.\n",
                user.name,
                self.token_ttl.num_minutes(),
                link
            ),
        }
    }
}

fn invalid_token() -> AppError {
    AppError::reset_token_invalid("Reset token is invalid or already used")
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoserve_auth::TokenIssuer;
    use autoserve_core::error::ErrorKind;
    use autoserve_database::stores::memory::MemoryUserStore;
    use autoserve_entity::Role;

    use crate::auth::{AuthService, Registration};
    use crate::mailer::MemoryMailer;

    const PASSWORD: &str = "kx9#mQ2$vL8pW3nZ";
    const NEW_PASSWORD: &str = "tY7!wR4&bN1mX6qe";

    struct Fixture {
        users: Arc<MemoryUserStore>,
        mailer: Arc<MemoryMailer>,
        auth: AuthService,
        reset: PasswordResetService,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MemoryUserStore::default());
        let mailer = Arc::new(MemoryMailer::default());
        let hasher = PasswordHasher::new();
        let policy = PasswordPolicy::new(8);

        let auth = AuthService::new(
            users.clone(),
            hasher.clone(),
            policy.clone(),
            Arc::new(TokenIssuer::new("test-secret", 7)),
        );
        let reset = PasswordResetService::new(
            users.clone(),
            hasher,
            policy,
            mailer.clone(),
            60,
            MailConfig::default(),
        );

        Fixture {
            users,
            mailer,
            auth,
            reset,
        }
    }

    async fn register(fixture: &Fixture, email: &str) {
        fixture
            .auth
            .register(
                Registration {
                    email: email.to_string(),
                    name: "Jo".to_string(),
                    phone: None,
                    password: PASSWORD.to_string(),
                },
                Role::Customer,
            )
            .await
            .unwrap();
    }

    /// Mail delivery runs on a detached task; poll briefly for it.
    async fn wait_for_mail(mailer: &MemoryMailer) -> MailMessage {
        for _ in 0..100 {
            if let Some(message) = mailer.sent().await.into_iter().next_back() {
                return message;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("no mail arrived");
    }

    fn token_from_mail(message: &MailMessage) -> String {
        // The link's last path segment is the raw token.
        message
            .body
            .lines()
            .find(|line| line.contains("/reset-password/"))
            .and_then(|line| line.rsplit('/').next())
            .map(|token| token.trim().to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_full_reset_round_trip() {
        let fixture = fixture();
        register(&fixture, "jo@example.com").await;

        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let mail = wait_for_mail(&fixture.mailer).await;
        assert_eq!(mail.to, "jo@example.com");
        let token = token_from_mail(&mail);
        assert_eq!(token.len(), 64);

        fixture
            .reset
            .complete_reset(&token, NEW_PASSWORD)
            .await
            .unwrap();

        // Old password out, new password in.
        assert!(fixture.auth.login("jo@example.com", PASSWORD).await.is_err());
        fixture
            .auth
            .login("jo@example.com", NEW_PASSWORD)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_request_for_unknown_email_succeeds_without_mail() {
        let fixture = fixture();
        fixture
            .reset
            .request_reset("nobody@example.com")
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(fixture.mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_token_is_single_use() {
        let fixture = fixture();
        register(&fixture, "jo@example.com").await;
        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let token = token_from_mail(&wait_for_mail(&fixture.mailer).await);

        fixture
            .reset
            .complete_reset(&token, NEW_PASSWORD)
            .await
            .unwrap();
        let err = fixture
            .reset
            .complete_reset(&token, "zQ3@fH8*jD5sK2wc")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResetTokenInvalid);
    }

    #[tokio::test]
    async fn test_garbage_token_is_invalid() {
        let fixture = fixture();
        let err = fixture
            .reset
            .complete_reset("deadbeef", NEW_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResetTokenInvalid);
    }

    #[tokio::test]
    async fn test_expired_token_is_reported_and_cleared() {
        let fixture = fixture();
        register(&fixture, "jo@example.com").await;
        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let token = token_from_mail(&wait_for_mail(&fixture.mailer).await);

        // Backdate the stored expiry.
        let user = fixture
            .users
            .find_by_email("jo@example.com")
            .await
            .unwrap()
            .unwrap();
        let digest = user.reset_token_digest.clone().unwrap();
        fixture
            .users
            .set_reset_token(user.id, &digest, Utc::now() - Duration::minutes(1))
            .await
            .unwrap();

        let err = fixture
            .reset
            .complete_reset(&token, NEW_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResetTokenExpired);

        // First touch cleared the fields; the second attempt cannot
        // tell the token ever existed.
        let err = fixture
            .reset
            .complete_reset(&token, NEW_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResetTokenInvalid);

        // And the password is unchanged.
        fixture.auth.login("jo@example.com", PASSWORD).await.unwrap();
    }

    #[tokio::test]
    async fn test_weak_replacement_password_is_rejected_and_token_survives() {
        let fixture = fixture();
        register(&fixture, "jo@example.com").await;
        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let token = token_from_mail(&wait_for_mail(&fixture.mailer).await);

        let err = fixture
            .reset
            .complete_reset(&token, "password")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        // The token was not consumed by the failed attempt.
        fixture
            .reset
            .complete_reset(&token, NEW_PASSWORD)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_new_request_invalidates_previous_token() {
        let fixture = fixture();
        register(&fixture, "jo@example.com").await;

        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let first = token_from_mail(&wait_for_mail(&fixture.mailer).await);

        fixture.reset.request_reset("jo@example.com").await.unwrap();
        let second = loop {
            let sent = fixture.mailer.sent().await;
            if sent.len() >= 2 {
                break token_from_mail(&sent[1]);
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        };
        assert_ne!(first, second);

        let err = fixture
            .reset
            .complete_reset(&first, NEW_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ResetTokenInvalid);

        fixture
            .reset
            .complete_reset(&second, NEW_PASSWORD)
            .await
            .unwrap();
    }
}
