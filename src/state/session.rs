//! Session manager: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once through Leptos context by `App`. Pages call its operations;
//! guards and identity-aware views subscribe to [`SessionManager::state`].
//!
//! DESIGN
//! ======
//! Every operation that can change the session draws a ticket from a shared
//! counter. An operation takes effect by committing its ticket: `initialize`
//! and `logout` commit immediately, `login` only once the backend has issued
//! a token. A response whose ticket is older than the last commit is dropped
//! without touching storage or state. A rejected or unreachable login never
//! commits, so it cannot orphan a startup check that is still in flight.
//! Overlapping logins resolve to the latest-started one that succeeds, and a
//! logout can never be undone by a slow response.
//!
//! ERROR HANDLING
//! ==============
//! Explicit actions (`login`, `register`) return their backend error to the
//! caller. Profile fetches never surface errors: a rejected or unreachable
//! profile endpoint clears the stored token and leaves the session signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::{AuthApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::{LoginForm, RegisterRequest};
use crate::state::auth::{AuthState, SessionUser};
use crate::util::token_store::{BrowserTokenStore, TokenStore};

/// The session manager wired to the browser transport and `localStorage`.
pub type AppSession = SessionManager<HttpApi, BrowserTokenStore>;

/// Failure of an explicit session action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A newer login or a logout took effect before this response arrived.
    #[error("superseded by a newer session request")]
    Superseded,
}

/// Result of resolving a token into a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Adoption {
    Accepted,
    Dropped,
    Stale,
}

/// Owns the auth state signal, the token store, and the backend seam.
pub struct SessionManager<A, S> {
    api: Arc<A>,
    store: Arc<S>,
    state: ArcRwSignal<AuthState>,
    tickets: Arc<AtomicU64>,
    committed: Arc<AtomicU64>,
}

impl<A, S> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: Arc::clone(&self.store),
            state: self.state.clone(),
            tickets: Arc::clone(&self.tickets),
            committed: Arc::clone(&self.committed),
        }
    }
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    /// A manager in the startup `loading` state. Call [`Self::initialize`] once.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Arc::new(api),
            store: Arc::new(store),
            state: ArcRwSignal::new(AuthState::default()),
            tickets: Arc::new(AtomicU64::new(0)),
            committed: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reactive handle to the auth state.
    pub fn state(&self) -> ArcRwSignal<AuthState> {
        self.state.clone()
    }

    /// Current auth state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Resolve the persisted token into a session. Runs once at startup and
    /// always leaves `loading` false.
    pub async fn initialize(&self) {
        let ticket = self.begin();
        self.commit(ticket);
        match self.store.load() {
            Some(token) => {
                self.adopt(token, ticket).await;
            }
            None => info!("session: no stored token, starting signed out"),
        }
        self.state.update(|s| s.loading = false);
    }

    /// Exchange credentials for a token and load its profile.
    ///
    /// Returns `Ok` once the token is issued, even if the follow-up profile
    /// fetch fails; that case leaves the session signed out.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank input, `Api` with the backend's error, or
    /// `Superseded` if a newer login or a logout took effect meanwhile.
    /// A failed exchange leaves the current session and any in-flight
    /// startup check untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        require("email", email)?;
        require("password", password)?;

        let ticket = self.begin();
        let response = self.api.login(&LoginForm::new(email, password)).await?;
        if !self.commit(ticket) {
            debug!("session: dropping superseded login response");
            return Err(SessionError::Superseded);
        }
        match self.adopt(response.access_token, ticket).await {
            Adoption::Stale => Err(SessionError::Superseded),
            Adoption::Accepted | Adoption::Dropped => Ok(()),
        }
    }

    /// Create an account, then log in with the same credentials.
    ///
    /// Password confirmation and strength rules belong to the caller.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank input, otherwise whatever registration or the
    /// follow-up [`Self::login`] returns.
    pub async fn register(
        &self,
        name: &str,
        roll_number: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        require("name", name)?;
        require("roll number", roll_number)?;
        require("email", email)?;
        require("password", password)?;

        let request = RegisterRequest {
            name: name.to_owned(),
            roll_number: roll_number.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.api.register(&request).await?;
        info!("session: registered a new account");
        self.login(email, password).await
    }

    /// Forget the token and profile. No network call.
    pub fn logout(&self) {
        let ticket = self.begin();
        self.commit(ticket);
        self.store.clear();
        self.state.update(|s| s.user = None);
        info!("session: signed out");
    }

    /// `GET path` with the session's bearer token attached when present.
    ///
    /// # Errors
    ///
    /// Returns the request's [`ApiError`]; session state is never touched.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.store.load();
        self.api.get_json(path, token.as_deref()).await
    }

    /// `POST path` with a JSON body and the session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns the request's [`ApiError`]; session state is never touched.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let token = self.store.load();
        self.api.post_json(path, body, token.as_deref()).await
    }

    fn begin(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Make `ticket` the latest operation to take effect. False if a newer
    /// one already has.
    fn commit(&self, ticket: u64) -> bool {
        self.committed.fetch_max(ticket, Ordering::SeqCst) <= ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.committed.load(Ordering::SeqCst) == ticket
    }

    /// Fetch the profile for `token` and commit token + profile together, or
    /// clear both on failure.
    async fn adopt(&self, token: String, ticket: u64) -> Adoption {
        let result = self.api.fetch_profile(&token).await;
        if !self.is_current(ticket) {
            debug!("session: dropping stale profile response");
            return Adoption::Stale;
        }
        match result {
            Ok(profile) => {
                info!("session: signed in as student {}", profile.id);
                self.store.save(&token);
                self.state.update(|s| s.user = Some(SessionUser { token, profile }));
                Adoption::Accepted
            }
            Err(e) => {
                warn!("session: profile fetch failed, clearing token: {e}");
                self.store.clear();
                self.state.update(|s| s.user = None);
                Adoption::Dropped
            }
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), SessionError> {
    if value.trim().is_empty() {
        Err(SessionError::MissingField(field))
    } else {
        Ok(())
    }
}
