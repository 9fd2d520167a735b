//! Listings browser: filter sidebar, sort, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters are seeded from the URL query (the home page search links here)
//! and written back to it on every change, so a filtered view can be shared
//! or reloaded.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::apartment_card::ApartmentCard;
use crate::components::fields::{NumberField, SelectField, SelectOption, TextField};
use crate::config::LISTINGS_PAGE_LIMIT;
use crate::net::api_apartments::{ApartmentFilters, ApartmentQuery, SortOrder};
use crate::state::session::use_session;
use crate::util::forms::{FilterForm, listings_path, page_count};

#[component]
pub fn ApartmentsPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let seed = query.with_untracked(|q| FilterForm::from_query(|key| q.get(key)));
    let city = RwSignal::new(seed.city.clone());
    let listing_type = RwSignal::new(seed.listing_type.clone());
    let min_price = RwSignal::new(seed.min_price.clone());
    let max_price = RwSignal::new(seed.max_price.clone());
    let rooms = RwSignal::new(seed.rooms.clone());

    let filters = RwSignal::new(seed.to_filters());
    let sort = RwSignal::new(
        query
            .with_untracked(|q| q.get("sort"))
            .and_then(|raw| SortOrder::parse(&raw))
            .unwrap_or_default(),
    );
    let page = RwSignal::new(
        query
            .with_untracked(|q| q.get("page"))
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1),
    );

    let results = LocalResource::new(move || {
        let session = session.clone();
        let query = ApartmentQuery::new(filters.get())
            .page(page.get(), LISTINGS_PAGE_LIMIT)
            .sort(sort.get());
        async move { session.api().apartments().list(&query).await }
    });

    // Mirror the applied search into the address bar.
    Effect::new(move || {
        let path = filters.with(|f| listings_path(f, sort.get(), page.get()));
        navigate(&path, NavigateOptions { replace: true, scroll: false, ..NavigateOptions::default() });
    });

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = FilterForm {
            city: city.get_untracked(),
            listing_type: listing_type.get_untracked(),
            min_price: min_price.get_untracked(),
            max_price: max_price.get_untracked(),
            rooms: rooms.get_untracked(),
        };
        filters.set(form.to_filters());
        page.set(1);
    };

    let clear_filters = move || {
        for field in [city, listing_type, min_price, max_price, rooms] {
            field.set(String::new());
        }
        filters.set(ApartmentFilters::default());
        page.set(1);
    };

    let sort_value = RwSignal::new(sort.get_untracked().as_str().to_owned());
    Effect::new(move || {
        if let Some(next) = SortOrder::parse(&sort_value.get()) {
            if next != sort.get_untracked() {
                sort.set(next);
                page.set(1);
            }
        }
    });
    let sort_options = SortOrder::ALL.iter().map(|s| SelectOption::new(s.as_str(), s.label())).collect::<Vec<_>>();

    view! {
        <div class="listings-page">
            <aside class="filters">
                <h2>"Filters"</h2>
                <form on:submit=on_apply>
                    <SelectField
                        label="Type"
                        value=listing_type
                        options=vec![
                            SelectOption::new("", "Any"),
                            SelectOption::new("rent", "For Rent"),
                            SelectOption::new("sale", "For Sale"),
                        ]
                    />
                    <TextField label="City" value=city placeholder="Any city"/>
                    <NumberField label="Min. rooms" value=rooms min="0"/>
                    <div class="form-grid form-grid--2">
                        <NumberField label="Min price" value=min_price min="0" step="any"/>
                        <NumberField label="Max price" value=max_price min="0" step="any"/>
                    </div>
                    <button class="btn btn--primary" type="submit">"Apply filters"</button>
                    <button class="btn btn--ghost" type="button" on:click=move |_| clear_filters()>
                        "Reset"
                    </button>
                </form>
            </aside>

            <section class="listings">
                <div class="listings__toolbar">
                    <h1>"Available properties"</h1>
                    <SelectField label="Sort by" value=sort_value options=sort_options/>
                </div>
                <Suspense fallback=move || view! { <p class="page-placeholder">"Loading listings..."</p> }>
                    {move || {
                        results
                            .get()
                            .map(|result| match result {
                                Err(e) => {
                                    log::warn!("listing search failed: {e}");
                                    view! { <p class="notice notice--error">{e.to_string()}</p> }.into_any()
                                }
                                Ok(found) if found.items.is_empty() => {
                                    view! {
                                        <div class="empty-state">
                                            <p>"No properties match your filters."</p>
                                            <button class="btn btn--secondary" on:click=move |_| clear_filters()>
                                                "Clear filters"
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Ok(found) => {
                                    let limit = if found.limit == 0 { LISTINGS_PAGE_LIMIT } else { found.limit };
                                    let pages = page_count(found.total, limit);
                                    view! {
                                        <p class="muted">{format!("{} found", found.total)}</p>
                                        <div class="card-grid">
                                            {found
                                                .items
                                                .into_iter()
                                                .map(|apartment| view! { <ApartmentCard apartment=apartment/> })
                                                .collect_view()}
                                        </div>
                                        <Pager page=page pages=pages/>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn Pager(page: RwSignal<u32>, pages: u32) -> impl IntoView {
    view! {
        <Show when=move || { pages > 1 }>
            <nav class="pager">
                <button
                    class="btn btn--ghost"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "← Prev"
                </button>
                <span class="pager__status">{move || format!("Page {} of {pages}", page.get())}</span>
                <button
                    class="btn btn--ghost"
                    disabled=move || page.get() >= pages
                    on:click=move |_| page.update(|p| *p = (*p + 1).min(pages))
                >
                    "Next →"
                </button>
            </nav>
        </Show>
    }
}
