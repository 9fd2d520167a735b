//! Route guards and permission predicates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and identity-aware components share these decisions so the
//! header, the pages, and the redirects never disagree. They are advisory:
//! the server rejects anything the caller is not allowed to do.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Apartment, User};
use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// Which audience a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    Authenticated,
    Admin,
}

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// A profile refresh may still change the answer.
    Pending,
    Redirect(&'static str),
}

impl GuardKind {
    pub fn evaluate(self, state: &SessionState) -> GuardDecision {
        let allowed = match self {
            Self::Authenticated => state.is_authenticated(),
            Self::Admin => state.is_admin(),
        };
        if allowed {
            GuardDecision::Allow
        } else if state.is_refreshing() {
            GuardDecision::Pending
        } else {
            GuardDecision::Redirect(self.redirect_target())
        }
    }

    /// The admin console bounces everyone else home, not to login.
    pub fn redirect_target(self) -> &'static str {
        match self {
            Self::Authenticated => LOGIN_ROUTE,
            Self::Admin => HOME_ROUTE,
        }
    }
}

/// Owners and admins may edit or delete a listing.
pub fn can_manage_listing(user: Option<&User>, apartment: &Apartment) -> bool {
    let Some(user) = user else {
        return false;
    };
    user.is_admin() || apartment.owner_id.as_deref() == Some(user.id.as_str())
}

/// An admin may not flip their own role.
pub fn can_change_role(actor: &User, target: &User) -> bool {
    actor.is_admin() && actor.id != target.id
}

/// Navigate away whenever the guard settles on a redirect.
pub fn install_guard_redirect<F>(kind: GuardKind, state: ReadSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = state.with(|s| kind.evaluate(s)) {
            log::debug!("guard {kind:?} redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
