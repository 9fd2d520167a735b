//! Wrappers that gate a page on the current session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::guards::{GuardDecision, GuardKind, install_guard_redirect};

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let state = use_session().state();
    install_guard_redirect(kind, state, use_navigate());
    let decision = Memo::new(move |_| state.with(|s| kind.evaluate(s)));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                let text = match decision.get() {
                    GuardDecision::Pending => "Checking your session...",
                    _ => "Redirecting...",
                };
                view! { <p class="page-placeholder">{text}</p> }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for signed-in users; others go to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Authenticated, children)
}

/// Renders children only for admins; everyone else goes to `/`.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Admin, children)
}
