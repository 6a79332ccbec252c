use std::sync::Arc;

use chrono::{DateTime, Utc};

use autoserve_auth::{PasswordHasher, PasswordPolicy, TokenIssuer};
use autoserve_core::{AppError, AppResult};
use autoserve_database::UserStore;
use autoserve_entity::{NewUser, Role, User};

use crate::context::RequestContext;

/// Input for account registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub password: String,
}

/// A freshly authenticated account with its bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
    issuer: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        policy: PasswordPolicy,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            issuer,
        }
    }

    /// Register a new account.
    ///
    /// The role is decided by the caller, not the request: the public
    /// registration endpoint always passes customer. Registration does
    /// not log the account in; clients go through [`Self::login`].
    pub async fn register(&self, registration: Registration, role: Role) -> AppResult<User> {
        let email = normalize_email(&registration.email);
        self.policy.check(&registration.password)?;
        let password_hash = self.hasher.hash(&registration.password)?;

        let user = self
            .users
            .insert(NewUser {
                email,
                name: registration.name,
                phone: registration.phone,
                password_hash,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "account registered");
        Ok(user)
    }

    /// Verify credentials and issue a session.
    ///
    /// An unknown email and a wrong password produce the same error, so
    /// the login endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedSession> {
        let email = normalize_email(email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(bad_credentials()),
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(bad_credentials());
        }

        tracing::info!(user_id = %user.id, "login succeeded");
        let (token, expires_at) = self.issuer.issue(&user)?;
        Ok(AuthenticatedSession {
            user,
            token,
            expires_at,
        })
    }

    /// The full account record behind an authenticated context.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account no longer exists"))
    }
}

fn bad_credentials() -> AppError {
    AppError::invalid_credentials("Invalid email or password")
}

/// Canonical form of a login identity: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
