//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior
//! and pick user-facing error text the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::SessionError;

/// True once the startup check is done and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Message shown for a failed login/register.
///
/// Only a JSON `detail` from the backend is shown as is. Anything else
/// (offline, a proxy error page, malformed response) falls back to
/// `fallback`.
pub fn auth_error_message(err: &SessionError, fallback: &str) -> String {
    match err {
        SessionError::Api(api) => api.detail().unwrap_or(fallback).to_owned(),
        SessionError::MissingField(_) => err.to_string(),
        SessionError::Superseded => fallback.to_owned(),
    }
}
