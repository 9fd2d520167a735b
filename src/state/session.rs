//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionContext`] is created by the root `App` and provided to the
//! view tree by context. Route guards and identity-aware components read its
//! state; all identity changes go through [`SessionContext::set_user`], which
//! also writes the persisted session.
//!
//! DESIGN
//! ======
//! Each identity change bumps `revision`. A profile refresh remembers the
//! revision it started at and drops its outcome if a login/logout happened in
//! the meantime, so a slow failing `/me` cannot sign out a user who just
//! signed in again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{FetchTransport, Transport};
use crate::net::types::User;
use crate::state::storage::{KeyValueStore, LocalStorage};

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    refreshes_in_flight: u32,
    revision: u64,
}

impl SessionState {
    /// State restored from a remembered session. Tokenless users are dropped.
    pub fn restored(user: Option<User>) -> Self {
        Self { user: user.filter(User::has_token), ..Self::default() }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Signed in with a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(User::has_token)
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(User::is_admin)
    }

    /// A profile refresh is still waiting on the server.
    pub fn is_refreshing(&self) -> bool {
        self.refreshes_in_flight > 0
    }

    /// Counter bumped on every identity change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn begin_refresh(&mut self) {
        self.refreshes_in_flight += 1;
    }

    pub fn finish_refresh(&mut self) {
        self.refreshes_in_flight = self.refreshes_in_flight.saturating_sub(1);
    }

    fn install(&mut self, user: Option<User>) {
        self.user = user;
        self.revision += 1;
    }
}

/// Combine a fresh `/me` profile with the token of the session it validated.
pub fn merge_profile(previous: &User, profile: User) -> User {
    User { token: previous.token.clone(), ..profile }
}

/// Session type provided by the browser app.
pub type Session = SessionContext<FetchTransport, LocalStorage>;

/// The app's [`Session`] from context.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Process-wide session handle shared through Leptos context.
#[derive(Clone, Debug)]
pub struct SessionContext<T = FetchTransport, B = LocalStorage> {
    api: ApiClient<T, B>,
    state: RwSignal<SessionState>,
}

impl<T, B> SessionContext<T, B>
where
    T: Transport + Send + Sync + 'static,
    B: KeyValueStore + Send + Sync + 'static,
{
    /// Build the context, restoring any remembered login from the store.
    pub fn new(api: ApiClient<T, B>) -> Self {
        let restored = SessionState::restored(api.store().read());
        if let Some(user) = restored.current_user() {
            log::debug!("restored session for {}", user.id);
        }
        Self { api, state: RwSignal::new(restored) }
    }

    pub fn api(&self) -> &ApiClient<T, B> {
        &self.api
    }

    /// Read-only reactive view of the session.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current user (tracked).
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Replace the current user and persist it. A user without a token is
    /// treated as signing out.
    pub fn set_user(&self, user: Option<User>) {
        let user = user.filter(|u| {
            let usable = u.has_token();
            if !usable {
                log::warn!("refusing to install user {} without a token", u.id);
            }
            usable
        });
        self.api.store().write(user.as_ref());
        self.state.update(|s| s.install(user));
    }

    pub fn logout(&self) {
        log::info!("signing out");
        self.set_user(None);
    }

    /// Exchange credentials for a session and install it.
    ///
    /// # Errors
    ///
    /// Returns the server's message when the credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let user = self.api.auth().login(email, password).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Create an account and install its session.
    ///
    /// # Errors
    ///
    /// Returns the server's message when registration is rejected.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let user = self.api.auth().register(name, email, password).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Validate the remembered session against `/api/users/me`.
    ///
    /// No-op without a stored token. Success installs the fresh profile with
    /// the stored token carried forward; failure signs out.
    pub async fn refresh_profile(&self) {
        let Some(previous) = self.api.store().read().filter(User::has_token) else {
            return;
        };
        let started_at = self.state.with_untracked(SessionState::revision);
        self.state.update(SessionState::begin_refresh);

        let outcome = self.api.users().me().await;

        self.state.update(SessionState::finish_refresh);
        if self.state.with_untracked(SessionState::revision) != started_at {
            log::debug!("discarding profile refresh overtaken by a newer sign-in");
            return;
        }
        match outcome {
            Ok(profile) => self.set_user(Some(merge_profile(&previous, profile))),
            Err(e) => {
                log::info!("stored session rejected ({e}); signing out");
                self.set_user(None);
            }
        }
    }
}
