//! Per-session context.
//!
//! A [`SessionContext`] is created when a shopper opens the storefront and is
//! handed to the catalog and cart constructors. Nothing in this crate reads
//! session state from a global.

use crate::error::CommerceError;
use crate::ids::SessionId;
use crate::money::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which dashboard the surrounding UI shows for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses the catalog and buys coffee.
    #[default]
    Buyer,
    /// Sells coffee; manages products elsewhere.
    Roaster,
    /// Marketplace operator.
    Admin,
}

impl Role {
    /// Lowercase role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Roaster => "roaster",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buyer" => Ok(Role::Buyer),
            "roaster" => Ok(Role::Roaster),
            "admin" => Ok(Role::Admin),
            other => Err(CommerceError::UnknownRole(other.to_string())),
        }
    }
}

/// Explicit state for one active user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Session identifier.
    pub id: SessionId,
    /// Role selected for this session.
    pub role: Role,
    /// Currency every price in the session is expressed in.
    pub currency: Currency,
    /// When the session was opened.
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Start a new session with a generated id.
    pub fn new(role: Role, currency: Currency) -> Self {
        Self::with_id(SessionId::generate(), role, currency)
    }

    /// Start a session with a known id.
    pub fn with_id(id: SessionId, role: Role, currency: Currency) -> Self {
        Self {
            id,
            role,
            currency,
            started_at: Utc::now(),
        }
    }

    /// A USD buyer session, the storefront default.
    pub fn buyer() -> Self {
        Self::new(Role::Buyer, Currency::USD)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::buyer()
    }
}
