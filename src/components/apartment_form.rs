//! Shared create/edit form for listings.

use leptos::prelude::*;

use crate::components::fields::{Button, Notice, NumberField, SelectField, SelectOption, TextArea, TextField};
use crate::net::types::{ApartmentPayload, ListingType};
use crate::util::forms::ListingDraft;

/// Listing form. Emits a validated payload; the page decides what to do with it.
#[component]
pub fn ApartmentForm(
    initial: ListingDraft,
    submit_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<ApartmentPayload>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(initial.price);
    let listing_type = RwSignal::new(initial.listing_type.as_str().to_owned());
    let city = RwSignal::new(initial.city);
    let address = RwSignal::new(initial.address);
    let rooms = RwSignal::new(initial.rooms);
    let area = RwSignal::new(initial.area);
    let floor = RwSignal::new(initial.floor);
    let image_url = RwSignal::new(initial.image_url);
    let invalid = RwSignal::new(None::<String>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ListingDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            listing_type: ListingType::parse(&listing_type.get_untracked()).unwrap_or_default(),
            city: city.get_untracked(),
            address: address.get_untracked(),
            rooms: rooms.get_untracked(),
            area: area.get_untracked(),
            floor: floor.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        match draft.to_payload() {
            Ok(payload) => {
                invalid.set(None);
                on_submit.run(payload);
            }
            Err(message) => invalid.set(Some(message.to_owned())),
        }
    };

    let shown_error = Signal::derive(move || invalid.get().or_else(|| error.get()));

    view! {
        <form class="listing-form" on:submit=on_form_submit>
            <TextField label="Property Title" value=title placeholder="Modern loft in the city center" required=true/>
            <TextArea label="Description" value=description rows=5 required=true/>
            <div class="form-grid form-grid--2">
                <NumberField label="Price ($)" value=price min="0" required=true/>
                <SelectField
                    label="Listing Type"
                    value=listing_type
                    options=vec![SelectOption::new("rent", "For Rent"), SelectOption::new("sale", "For Sale")]
                />
            </div>
            <div class="form-grid form-grid--2">
                <TextField label="City" value=city required=true/>
                <TextField label="Address" value=address required=true/>
            </div>
            <div class="form-grid form-grid--3">
                <NumberField label="Rooms" value=rooms min="0" required=true/>
                <NumberField label="Area (m²)" value=area step="any" min="0" required=true/>
                <NumberField label="Floor" value=floor required=true/>
            </div>
            <TextField label="Image URL" value=image_url input_type="url" required=true/>
            <Notice message=shown_error/>
            <Button busy=busy busy_label="Saving...">{submit_label}</Button>
        </form>
    }
}
