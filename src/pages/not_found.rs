//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"404"</h1>
            <p class="muted">"This page does not exist."</p>
            <a class="btn btn--primary" href="/">"Go home"</a>
        </div>
    }
}
