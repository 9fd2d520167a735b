//! Landing page: hero search, featured listings, promo, about.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::apartment_card::ApartmentCard;
use crate::components::fields::{SelectField, SelectOption};
use crate::config::{FEATURED_COUNT, FEATURED_PAGE_LIMIT};
use crate::net::api_apartments::{ApartmentFilters, ApartmentQuery, SortOrder};
use crate::net::types::ListingType;
use crate::state::session::use_session;
use crate::util::forms::{HeroSearch, PriceBand};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let featured = LocalResource::new(move || {
        let session = session.clone();
        async move {
            let query = ApartmentQuery::new(ApartmentFilters::default())
                .page(1, FEATURED_PAGE_LIMIT)
                .sort(SortOrder::Newest);
            session.api().apartments().list(&query).await.map(|page| {
                page.items.into_iter().take(FEATURED_COUNT).collect::<Vec<_>>()
            })
        }
    });

    let city = RwSignal::new(String::new());
    let listing_type = RwSignal::new(ListingType::Rent.as_str().to_owned());
    let band = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let search = HeroSearch {
            city: city.get_untracked(),
            listing_type: ListingType::parse(&listing_type.get_untracked()).unwrap_or_default(),
            band: PriceBand::parse(&band.get_untracked()),
        };
        navigate(&search.to_path(), NavigateOptions::default());
    };

    let band_options = PriceBand::ALL.iter().map(|b| SelectOption::new(b.as_str(), b.label())).collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Find your next " <span>"perfect home"</span></h1>
                <p class="hero__subtitle">
                    "Browse apartments, houses, and rooms listed by their owners."
                </p>
                <form class="hero__search" on:submit=on_search>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="City or Neighborhood"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                    <SelectField
                        label="Type"
                        value=listing_type
                        options=vec![SelectOption::new("rent", "For Rent"), SelectOption::new("sale", "For Sale")]
                    />
                    <SelectField label="Price" value=band options=band_options/>
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </section>

            <section class="section">
                <div class="section__header">
                    <div>
                        <h2>"Featured Properties"</h2>
                        <p class="muted">"The newest places on the market"</p>
                    </div>
                    <a class="section__link" href="/apartments">"View All →"</a>
                </div>
                <Suspense fallback=move || view! { <p class="page-placeholder">"Loading featured listings..."</p> }>
                    {move || {
                        featured
                            .get()
                            .map(|result| match result {
                                Ok(items) if items.is_empty() => {
                                    view! { <p class="muted">"No listings yet."</p> }.into_any()
                                }
                                Ok(items) => {
                                    view! {
                                        <div class="card-grid">
                                            {items
                                                .into_iter()
                                                .map(|apartment| view! { <ApartmentCard apartment=apartment/> })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    log::warn!("featured listings failed: {e}");
                                    view! { <p class="notice notice--error">{e.to_string()}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="promo">
                <div>
                    <h2>"Have a property to rent or sell?"</h2>
                    <p>"List it in minutes and reach people looking for their next home."</p>
                </div>
                <a class="btn btn--secondary" href="/apartments/new">"List your property"</a>
            </section>

            <section class="section about">
                <h2>"About Rentify"</h2>
                <p>
                    "Every listing is reviewed by our moderators before it goes live. "
                    "Contact owners directly from the listing page, and reach our team "
                    "any time through the help center."
                </p>
            </section>
        </div>
    }
}
