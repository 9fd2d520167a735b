//! Profile page: identity, own listings, and incoming contact requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Incoming requests are polled while the page is mounted. The poll loop
//! checks a flag flipped by `on_cleanup`, so it stops after unmount; it keeps
//! running while the tab is in the background.

use leptos::prelude::*;

use crate::components::route_guard::RequireAuth;
use crate::net::types::{Apartment, ContactRequest};
use crate::state::profile::ProfileState;
use crate::state::session::{Session, use_session};
use crate::util::dialog::confirm;
use crate::util::format::{format_date, format_price, moderation_label};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Profile/>
        </RequireAuth>
    }
}

fn load_listings(session: Session, profile: RwSignal<ProfileState>) {
    leptos::task::spawn_local(async move {
        match session.api().apartments().get_mine().await {
            Ok(items) => {
                let _ = profile.try_update(|p| p.set_listings(items));
            }
            Err(e) => {
                log::warn!("loading own listings failed: {e}");
                let _ = profile.try_update(|p| p.fail(e.to_string()));
            }
        }
    });
}

async fn refresh_incoming(session: &Session, profile: RwSignal<ProfileState>) -> bool {
    match session.api().requests().incoming().await {
        Ok(items) => profile.try_update(|p| p.set_incoming(items)).is_some(),
        Err(e) => {
            log::warn!("loading incoming requests failed: {e}");
            profile.try_update(|p| p.fail(e.to_string())).is_some()
        }
    }
}

#[component]
fn Profile() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let profile = RwSignal::new(ProfileState::loading());

    load_listings(session.clone(), profile);
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            refresh_incoming(&session, profile).await;
        });
    }

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let poll_alive = Arc::new(AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(crate::config::INCOMING_POLL_INTERVAL).await;
                if !poll_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                if !refresh_incoming(&session, profile).await {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, Ordering::Relaxed));
    }

    let on_delete_listing = Callback::new({
        let session = session.clone();
        move |id: String| {
            if !confirm("Delete this listing? This cannot be undone.") {
                return;
            }
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.api().apartments().remove(&id).await {
                    Ok(()) => {
                        let _ = profile.try_update(|p| p.remove_listing(&id));
                    }
                    Err(e) => {
                        log::warn!("deleting listing {id} failed: {e}");
                        let _ = profile.try_update(|p| p.error = Some(e.to_string()));
                    }
                }
            });
        }
    });

    let on_decline = Callback::new(move |id: String| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.api().requests().remove(&id).await {
                Ok(()) => {
                    let _ = profile.try_update(|p| p.remove_request(&id));
                }
                Err(e) => {
                    log::warn!("declining request {id} failed: {e}");
                    let _ = profile.try_update(|p| p.error = Some(e.to_string()));
                }
            }
        });
    });

    let identity = move || state.with(|s| s.current_user().cloned());

    view! {
        <div class="profile-page">
            <section class="card profile-card">
                {move || {
                    identity()
                        .map(|user| {
                            let initial = user.name.chars().next().unwrap_or('?').to_uppercase().to_string();
                            view! {
                                <div class="profile-card__avatar">{initial}</div>
                                <div>
                                    <h1>{user.name.clone()}</h1>
                                    <p class="muted">{user.email.clone()}</p>
                                    <span class="badge">{user.role.as_str()}</span>
                                </div>
                            }
                        })
                }}
                <a class="btn btn--primary" href="/apartments/new">"+ Add listing"</a>
            </section>

            <Show when=move || profile.with(|p| p.error.is_some())>
                <p class="notice notice--error">{move || profile.with(|p| p.error.clone()).unwrap_or_default()}</p>
            </Show>

            <section class="card">
                <h2>"My listings"</h2>
                <Show
                    when=move || !profile.with(|p| p.listings_loading)
                    fallback=|| view! { <p class="page-placeholder">"Loading your listings..."</p> }
                >
                    <Show
                        when=move || profile.with(|p| !p.listings.is_empty())
                        fallback=|| view! { <p class="muted">"You have not listed anything yet."</p> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Price"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || profile.with(|p| p.listings.clone())
                                    key=|apt| apt.id.clone()
                                    children=move |apt| view! { <ListingRow apartment=apt on_delete=on_delete_listing/> }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>

            <section class="card">
                <h2>"Incoming requests"</h2>
                <Show
                    when=move || !profile.with(|p| p.incoming_loading)
                    fallback=|| view! { <p class="page-placeholder">"Loading requests..."</p> }
                >
                    <Show
                        when=move || profile.with(|p| !p.incoming.is_empty())
                        fallback=|| view! { <p class="muted">"No requests yet."</p> }
                    >
                        <ul class="request-list">
                            <For
                                each=move || profile.with(|p| p.incoming.clone())
                                key=|req| req.id.clone()
                                children=move |req| view! { <RequestRow request=req on_decline=on_decline/> }
                            />
                        </ul>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn ListingRow(apartment: Apartment, on_delete: Callback<String>) -> impl IntoView {
    let id = apartment.id.clone();
    let hidden = apartment.is_hidden;
    view! {
        <tr>
            <td>
                <a href=format!("/apartments/{}", apartment.id)>{apartment.title.clone()}</a>
            </td>
            <td>{format_price(apartment.price, apartment.listing_type)}</td>
            <td>
                {moderation_label(apartment.status)}
                {hidden.then_some(" (hidden)")}
            </td>
            <td class="table__actions">
                <a class="btn btn--ghost" href=format!("/apartments/{}/edit", apartment.id)>"Edit"</a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>"Delete"</button>
            </td>
        </tr>
    }
}

#[component]
fn RequestRow(request: ContactRequest, on_decline: Callback<String>) -> impl IntoView {
    let id = request.id.clone();
    let from = &request.from_user;
    let sender = from.name.clone().or_else(|| from.email.clone()).unwrap_or_else(|| "Unknown user".to_owned());
    let email = from.email.clone();
    view! {
        <li class="request">
            <div class="request__head">
                {request
                    .apartment
                    .as_ref()
                    .map_or_else(
                        || view! { <span class="muted">"(listing removed)"</span> }.into_any(),
                        |apt| view! { <a href=format!("/apartments/{}", apt.id)>{apt.title.clone()}</a> }.into_any(),
                    )}
                <span class="muted">{format_date(request.created_at.as_deref())}</span>
            </div>
            <p class="request__from">
                {sender}
                {email.map(|e| format!(" <{e}>"))}
                {format!(" · {}", request.phone)}
            </p>
            <p class="request__message">{request.message.clone()}</p>
            <button class="btn btn--ghost" on:click=move |_| on_decline.run(id.clone())>"Decline"</button>
        </li>
    }
}
