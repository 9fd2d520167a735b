//! Account creation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::fields::{Button, Notice, TextField};
use crate::state::session::use_session;
use crate::util::forms::validate_register;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(msg) = validate_register(&name_value, &email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&name_value, &email_value, &password_value).await {
                Ok(_) => navigate("/profile", NavigateOptions::default()),
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Create an account"</h1>
                <p class="muted">"List properties and contact owners."</p>
                <form on:submit=on_submit>
                    <TextField label="Full name" value=name autocomplete="name" required=true/>
                    <TextField label="Email" value=email input_type="email" autocomplete="email" required=true/>
                    <TextField
                        label="Password"
                        value=password
                        input_type="password"
                        autocomplete="new-password"
                        required=true
                    />
                    <Notice message=error/>
                    <Button busy=busy busy_label="Creating account...">"Create account"</Button>
                </form>
                <p class="auth-card__switch">"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
