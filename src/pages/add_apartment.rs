//! Create-listing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::apartment_form::ApartmentForm;
use crate::components::route_guard::RequireAuth;
use crate::net::types::ApartmentPayload;
use crate::state::session::use_session;
use crate::util::forms::ListingDraft;

#[component]
pub fn AddApartmentPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AddApartment/>
        </RequireAuth>
    }
}

#[component]
fn AddApartment() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |payload: ApartmentPayload| {
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.api().apartments().create(&payload).await {
                Ok(created) => {
                    log::info!("listing {} submitted for review", created.id);
                    navigate("/profile", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("creating listing failed: {e}");
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
    });

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Add New Property"</h1>
                <p class="muted">
                    "Fill in the details about the property. New listings appear publicly once a moderator approves them."
                </p>
                <ApartmentForm
                    initial=ListingDraft::default()
                    submit_label="Publish listing"
                    busy=busy
                    error=error
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
