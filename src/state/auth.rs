//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by `SessionManager`; read by route guards and identity-aware
//! pages to coordinate login redirects and profile rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Profile;

/// The signed-in student: the accepted token and the profile it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub token: String,
    pub profile: Profile,
}

/// Authentication state tracking the current user and startup status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True from startup until the persisted token has been checked.
    pub loading: bool,
}

/// Coarse lifecycle position, derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup token check still in flight.
    Loading,
    Authenticated,
    Unauthenticated,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.user.as_ref().map(|user| &user.profile)
    }
}
