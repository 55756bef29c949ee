//! Authentication state shared across the component tree.
//!
//! Provided as an `RwSignal<AuthState>` from `App`; every consumer pattern
//! matches on the explicit variants instead of juggling a user field and a
//! loading flag separately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Where the session stands, from the UI's point of view.
///
/// `Resolving` holds from mount until the one-time startup check settles;
/// after that the state only moves between `Anonymous` and `Authenticated`
/// (login, logout), never back to `Resolving`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Resolving,
    Anonymous,
    Authenticated(User),
}

/// What the route guard should do for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Still resolving: show a placeholder, make no navigation decision.
    Wait,
    /// No session: send the visitor to the login page.
    RedirectToLogin,
    /// Authenticated: render the guarded content.
    Allow,
}

impl AuthState {
    /// Fold the startup (or post-login) user lookup into a settled state.
    pub fn resolved(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, Self::Authenticated)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Resolving | Self::Anonymous => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Route-guard decision for this state.
    pub fn guard(&self) -> GuardOutcome {
        match self {
            Self::Resolving => GuardOutcome::Wait,
            Self::Anonymous => GuardOutcome::RedirectToLogin,
            Self::Authenticated(_) => GuardOutcome::Allow,
        }
    }
}
