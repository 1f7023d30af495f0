//! Role-based redirect from the login form.
//!
//! There is no authentication: the selected role only decides which
//! dashboard the visitor is sent to.

use core::fmt;

use handloom_core::Role;

/// Dashboard page a visitor is sent to after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    BuyerDashboard,
    ArtisanDashboard,
    MarketingDashboard,
}

impl Destination {
    /// Page path for this destination.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::BuyerDashboard => "buyer-dashboard.html",
            Self::ArtisanDashboard => "artisan-dashboard.html",
            Self::MarketingDashboard => "marketing-dashboard.html",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl From<Role> for Destination {
    fn from(role: Role) -> Self {
        match role {
            Role::Buyer => Self::BuyerDashboard,
            Role::Artisan => Self::ArtisanDashboard,
            // No admin dashboard exists yet; admins share the marketing one.
            Role::Marketing | Role::Admin => Self::MarketingDashboard,
        }
    }
}

/// Performs page navigation.
pub trait Navigator {
    /// Navigate to `path`.
    fn navigate(&mut self, path: &str);
}

/// Destination for a raw role value from the form. Unrecognised values go
/// to the buyer dashboard.
#[must_use]
pub fn redirect_target(raw_role: &str) -> Destination {
    raw_role.parse::<Role>().map_or_else(
        |e| {
            tracing::debug!(error = %e, "defaulting to buyer dashboard");
            Destination::BuyerDashboard
        },
        Destination::from,
    )
}

/// Login form submission: navigate to the role's dashboard.
pub fn submit_login<N: Navigator>(raw_role: &str, navigator: &mut N) -> Destination {
    let destination = redirect_target(raw_role);
    tracing::info!(role = raw_role, %destination, "login redirect");
    navigator.navigate(destination.path());
    destination
}
