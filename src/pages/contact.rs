//! Help-center page. Anyone can send a message to the administrators.

use leptos::prelude::*;

use crate::components::fields::{Button, Notice, TextArea, TextField};
use crate::state::session::use_session;
use crate::util::forms::contact_payload;

#[component]
pub fn ContactPage() -> impl IntoView {
    let session = use_session();
    let seed = session.state().with_untracked(|s| s.current_user().cloned());
    let name = RwSignal::new(seed.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(seed.map(|u| u.email).unwrap_or_default());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        success.set(None);
        let payload = match contact_payload(
            &name.get_untracked(),
            &phone.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().contact().submit(&payload).await {
                Ok(created) => {
                    log::info!("contact message {} sent", created.id);
                    let _ = success.try_set(Some("Your request has been sent. We will contact you soon.".to_owned()));
                    for field in [name, phone, email, message] {
                        let _ = field.try_set(String::new());
                    }
                }
                Err(e) => {
                    log::warn!("contact message failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="contact-page">
            <section class="contact-page__intro">
                <h1>"Get in touch"</h1>
                <p>
                    "Questions about a listing or your account? Leave a message and our team will get back to you."
                </p>
                <ul class="contact-page__channels">
                    <li>"Phone: +7 (777) 777 7777"</li>
                    <li>"Email: support@rentify.example"</li>
                </ul>
            </section>
            <section class="card">
                <form on:submit=on_submit>
                    <div class="form-grid form-grid--2">
                        <TextField label="Name" value=name autocomplete="name"/>
                        <TextField label="Phone" value=phone input_type="tel" autocomplete="tel"/>
                    </div>
                    <TextField label="Email" value=email input_type="email" autocomplete="email"/>
                    <TextArea label="Message" value=message rows=5 required=true/>
                    <Notice message=error/>
                    <Notice message=success success=true/>
                    <Button busy=busy busy_label="Sending...">"Send message"</Button>
                </form>
            </section>
        </div>
    }
}
