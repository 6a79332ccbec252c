//! Per-request caller identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use autoserve_core::{AppError, AppResult};
use autoserve_entity::Role;

/// The authenticated caller of the current request.
///
/// Built from verified token claims by the HTTP layer; everything below
/// that layer trusts this context and never re-reads the token.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Account ID from the token's subject.
    pub user_id: Uuid,
    /// Role from the token. A role snapshot, not a live lookup.
    pub role: Role,
    /// When the context was built.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Whether the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Guard for admin-only operations.
///
/// Reaching this guard means authentication already succeeded, so the
/// failure here is forbidden, never unauthenticated.
pub fn require_admin(ctx: &RequestContext) -> AppResult<()> {
    if !ctx.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoserve_core::error::ErrorKind;

    #[test]
    fn test_require_admin_rejects_customers() {
        let customer = RequestContext::new(Uuid::new_v4(), Role::Customer);
        let admin = RequestContext::new(Uuid::new_v4(), Role::Admin);

        let err = require_admin(&customer).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(require_admin(&admin).is_ok());
    }
}
