use std::str::FromStr;

use serde::{Deserialize, Serialize};

use autoserve_core::AppError;

/// Authorization role carried by every account and every bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account: may create and view its own bookings.
    Customer,
    /// Operator account: full visibility and lifecycle control.
    Admin,
}

impl Role {
    /// Whether this role grants administrative access.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The lowercase wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Customer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::validation(format!("Unknown role: {other}"))),
        }
    }
}
