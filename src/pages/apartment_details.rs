//! Single listing page with owner controls, contact request, and report forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::fields::{Button, ButtonVariant, Notice, TextArea, TextField};
use crate::net::types::Apartment;
use crate::state::session::use_session;
use crate::util::format::{format_price, listing_type_label, moderation_label, rooms_label};
use crate::util::forms::{validate_report, validate_request};
use crate::util::guards::can_manage_listing;

#[component]
pub fn ApartmentDetailsPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let apartment_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let apartment = LocalResource::new(move || {
        let session = session.clone();
        let id = apartment_id.get();
        async move { session.api().apartments().get(&id).await }
    });

    view! {
        <div class="details-page">
            <a class="back-link" href="/apartments">"← Back to listings"</a>
            <Suspense fallback=move || view! { <p class="page-placeholder">"Loading listing..."</p> }>
                {move || {
                    apartment
                        .get()
                        .map(|result| match result {
                            Ok(apt) => view! { <ApartmentDetails apartment=apt/> }.into_any(),
                            Err(e) if e.is_not_found() => view! { <NotFound/> }.into_any(),
                            Err(e) => {
                                log::warn!("loading listing failed: {e}");
                                view! { <p class="notice notice--error">{e.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"Apartment not found"</h2>
            <p class="muted">"It may have been removed or is still waiting for review."</p>
            <a class="btn btn--primary" href="/apartments">"Back to listings"</a>
        </div>
    }
}

#[component]
fn ApartmentDetails(apartment: Apartment) -> impl IntoView {
    let state = use_session().state();
    let manage_apartment = apartment.clone();
    let can_manage = move || state.with(|s| can_manage_listing(s.current_user(), &manage_apartment));
    let signed_in = move || state.with(|s| s.is_authenticated());
    let edit_href = format!("/apartments/{}/edit", apartment.id);
    let request_id = apartment.id.clone();
    let report_id = apartment.id.clone();
    let status = apartment.status;

    view! {
        <div class="details">
            <div class="details__main">
                <div class="details__image">
                    <img src=apartment.image_url.clone() alt=apartment.title.clone()/>
                    <span class="badge">{listing_type_label(apartment.listing_type)}</span>
                </div>
                <div class="card">
                    <div class="details__heading">
                        <div>
                            <h1>{apartment.title.clone()}</h1>
                            <p class="muted">{format!("{}, {}", apartment.address, apartment.city)}</p>
                        </div>
                        <p class="details__price">{format_price(apartment.price, apartment.listing_type)}</p>
                    </div>
                    <ul class="details__facts">
                        <li>{rooms_label(apartment.rooms)}</li>
                        <li>{format!("{} m²", apartment.area)}</li>
                        <li>{format!("Floor {}", apartment.floor)}</li>
                    </ul>
                    <h2>"Description"</h2>
                    <p class="details__description">{apartment.description.clone()}</p>
                </div>
            </div>

            <aside class="details__side">
                <Show
                    when=can_manage.clone()
                    fallback=move || view! { <ContactOwnerForm apartment_id=request_id.clone()/> }
                >
                    <div class="card">
                        <h2>"Your listing"</h2>
                        <p class="muted">{moderation_label(status)}</p>
                        <a class="btn btn--primary" href=edit_href.clone()>"Edit listing"</a>
                    </div>
                </Show>
                <Show when=move || signed_in() && !can_manage()>
                    <ReportForm apartment_id=report_id.clone()/>
                </Show>
            </aside>
        </div>
    }
}

/// "Contact owner" form. Anonymous visitors are sent to login on submit.
#[component]
fn ContactOwnerForm(apartment_id: String) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if !session.state().with_untracked(|s| s.is_authenticated()) {
            navigate("/login", NavigateOptions::default());
            return;
        }
        let (phone_value, message_value) = match validate_request(&phone.get_untracked(), &message.get_untracked()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let apartment_id = apartment_id.clone();
        leptos::task::spawn_local(async move {
            let result = session.api().requests().create(&apartment_id, &phone_value, &message_value).await;
            let _ = busy.try_set(false);
            match result {
                Ok(_) => {
                    let _ = sent.try_set(true);
                    schedule_reset(move || {
                        let _ = sent.try_set(false);
                        let _ = phone.try_set(String::new());
                        let _ = message.try_set(String::new());
                    });
                }
                Err(e) => {
                    log::warn!("contact request failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2>"Contact the owner"</h2>
            <Show
                when=move || !sent.get()
                fallback=|| {
                    view! {
                        <p class="notice notice--success">
                            "Request sent! The owner will get back to you soon."
                        </p>
                    }
                }
            >
                <form on:submit=on_submit.clone()>
                    <TextField label="Phone" value=phone input_type="tel" required=true/>
                    <TextArea label="Message" value=message placeholder="I'm interested in this property..." required=true/>
                    <Notice message=error/>
                    <Button busy=busy busy_label="Sending...">"Send request"</Button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn ReportForm(apartment_id: String) -> impl IntoView {
    let session = use_session();
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let reason_value = match validate_report(&reason.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let apartment_id = apartment_id.clone();
        leptos::task::spawn_local(async move {
            let result = session.api().reports().create(&apartment_id, &reason_value).await;
            let _ = busy.try_set(false);
            match result {
                Ok(created) => {
                    log::info!("report {} filed", created.id);
                    let _ = sent.try_set(true);
                    schedule_reset(move || {
                        let _ = sent.try_set(false);
                        let _ = reason.try_set(String::new());
                    });
                }
                Err(e) => {
                    log::warn!("report failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <details class="card report">
            <summary>"Report this listing"</summary>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="notice notice--success">"Thanks, our moderators will take a look."</p> }
            >
                <form on:submit=on_submit.clone()>
                    <TextArea label="What's wrong?" value=reason rows=3 required=true/>
                    <Notice message=error/>
                    <Button variant=ButtonVariant::Danger busy=busy>"Send report"</Button>
                </form>
            </Show>
        </details>
    }
}

/// Run `reset` once the confirmation has been visible long enough.
fn schedule_reset<F>(reset: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::CONFIRMATION_RESET_DELAY).await;
        reset();
    });
    #[cfg(not(feature = "csr"))]
    let _ = reset;
}
