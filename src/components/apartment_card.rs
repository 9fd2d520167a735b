//! Listing card used by the home page and the listings browser.

use leptos::prelude::*;

use crate::net::types::{Apartment, ListingType};
use crate::util::format::{format_price, listing_type_label, rooms_label};

/// A clickable summary of one listing.
#[component]
pub fn ApartmentCard(apartment: Apartment) -> impl IntoView {
    let href = format!("/apartments/{}", apartment.id);
    let price = format_price(apartment.price, apartment.listing_type);
    let badge_class = match apartment.listing_type {
        ListingType::Rent => "badge badge--rent",
        ListingType::Sale => "badge badge--sale",
    };
    let location = if apartment.address.is_empty() {
        apartment.city.clone()
    } else {
        format!("{}, {}", apartment.address, apartment.city)
    };

    view! {
        <a class="apartment-card" href=href>
            <div class="apartment-card__image">
                <img src=apartment.image_url.clone() alt=apartment.title.clone() loading="lazy"/>
                <span class=badge_class>{listing_type_label(apartment.listing_type)}</span>
            </div>
            <div class="apartment-card__body">
                <h3 class="apartment-card__title">{apartment.title.clone()}</h3>
                <p class="apartment-card__location">{location}</p>
                <div class="apartment-card__meta">
                    <span>{rooms_label(apartment.rooms)}</span>
                    <span>{format!("{} m²", apartment.area)}</span>
                </div>
                <p class="apartment-card__price">{price}</p>
            </div>
        </a>
    }
}
