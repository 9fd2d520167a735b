//! Edit-listing page. Pre-fills from the server and returns to the profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::apartment_form::ApartmentForm;
use crate::components::route_guard::RequireAuth;
use crate::net::types::ApartmentPayload;
use crate::state::session::use_session;
use crate::util::forms::ListingDraft;

#[component]
pub fn EditApartmentPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <EditApartment/>
        </RequireAuth>
    }
}

#[component]
fn EditApartment() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let apartment_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let loaded = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            let id = apartment_id.get();
            async move { session.api().apartments().get(&id).await }
        }
    });

    // A listing that no longer exists has nothing to edit.
    let navigate_missing = navigate.clone();
    Effect::new(move || {
        if let Some(Err(e)) = loaded.get() {
            if e.is_not_found() {
                log::info!("listing {} is gone; back to profile", apartment_id.get_untracked());
                navigate_missing("/profile", NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let on_submit = Callback::new(move |payload: ApartmentPayload| {
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let navigate = navigate.clone();
        let id = apartment_id.get_untracked();
        leptos::task::spawn_local(async move {
            match session.api().apartments().update(&id, &payload).await {
                Ok(_) => navigate("/profile", NavigateOptions::default()),
                Err(e) => {
                    log::warn!("updating listing {id} failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
    });

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Edit Property"</h1>
                <Suspense fallback=move || view! { <p class="page-placeholder">"Loading listing..."</p> }>
                    {move || {
                        loaded
                            .get()
                            .map(|result| match result {
                                Ok(apt) => {
                                    view! {
                                        <ApartmentForm
                                            initial=ListingDraft::from_apartment(&apt)
                                            submit_label="Save changes"
                                            busy=busy
                                            error=error
                                            on_submit=on_submit
                                        />
                                    }
                                        .into_any()
                                }
                                Err(e) if e.is_not_found() => {
                                    view! { <p class="page-placeholder">"Listing not found."</p> }.into_any()
                                }
                                Err(e) => view! { <p class="notice notice--error">{e.to_string()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
