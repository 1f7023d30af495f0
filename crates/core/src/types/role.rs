//! Roles a visitor can pick on the login form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Role`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The value does not name a known role.
    #[error("unknown role: {0}")]
    Unknown(String),
}

/// Marketplace role selected at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Shops the catalog and checks out.
    #[default]
    Buyer,
    /// Maintains their own product listings.
    Artisan,
    /// Curates homepage banners.
    Marketing,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// All roles in login form order.
    pub const ALL: [Self; 4] = [Self::Buyer, Self::Artisan, Self::Marketing, Self::Admin];

    /// Returns the form value for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Artisan => "artisan",
            Self::Marketing => "marketing",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleError::Unknown(s.to_owned()))
    }
}
