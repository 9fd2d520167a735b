use std::collections::HashMap;

use serde_json::json;

use super::*;

fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn filled_draft() -> ListingDraft {
    ListingDraft {
        title: " Sunny loft ".to_owned(),
        description: "Top floor".to_owned(),
        price: "1200".to_owned(),
        listing_type: ListingType::Rent,
        city: "Almaty".to_owned(),
        address: "1 Main St".to_owned(),
        rooms: "2".to_owned(),
        area: "54.5".to_owned(),
        floor: "-1".to_owned(),
        image_url: "https://img.example/1.jpg".to_owned(),
    }
}

#[test]
fn filter_form_drops_blank_and_unparsable_values() {
    let form = FilterForm {
        city: "  ".to_owned(),
        listing_type: "lease".to_owned(),
        min_price: "500".to_owned(),
        max_price: "lots".to_owned(),
        rooms: String::new(),
    };

    let filters = form.to_filters();

    assert_eq!(filters, ApartmentFilters { min_price: Some(500.0), ..ApartmentFilters::default() });
}

#[test]
fn filter_form_seeds_from_url_query() {
    let form = FilterForm::from_query(query(&[("city", "Paris"), ("type", "sale"), ("rooms", "3")]));

    let filters = form.to_filters();

    assert_eq!(filters.city.as_deref(), Some("Paris"));
    assert_eq!(filters.listing_type, Some(ListingType::Sale));
    assert_eq!(filters.rooms, Some(3));
    assert!(!form.is_empty());
    assert!(FilterForm::default().is_empty());
}

#[test]
fn hero_search_maps_price_band_to_bounds() {
    let low = HeroSearch { city: "Oslo".to_owned(), listing_type: ListingType::Rent, band: PriceBand::Low };
    let mid = HeroSearch { band: PriceBand::Mid, ..low.clone() };
    let high = HeroSearch { city: String::new(), listing_type: ListingType::Sale, band: PriceBand::High };

    assert_eq!(low.to_path(), "/apartments?city=Oslo&type=rent&maxPrice=1000");
    assert_eq!(mid.to_path(), "/apartments?city=Oslo&type=rent&minPrice=1000&maxPrice=3000");
    assert_eq!(high.to_path(), "/apartments?type=sale&minPrice=3000");
}

#[test]
fn price_band_parse_falls_back_to_any() {
    assert_eq!(PriceBand::parse("mid"), PriceBand::Mid);
    assert_eq!(PriceBand::parse("cheap"), PriceBand::Any);
    assert_eq!(PriceBand::Any.bounds(), (None, None));
}

#[test]
fn listings_path_omits_defaults() {
    let filters = ApartmentFilters { city: Some("New York".to_owned()), ..ApartmentFilters::default() };
    assert_eq!(listings_path(&filters, SortOrder::Newest, 1), "/apartments?city=New%20York");
    assert_eq!(
        listings_path(&ApartmentFilters::default(), SortOrder::PriceAsc, 2),
        "/apartments?sort=price_asc&page=2"
    );
    assert_eq!(listings_path(&ApartmentFilters::default(), SortOrder::Newest, 1), "/apartments");
}

#[test]
fn page_count_rounds_up_and_never_hits_zero() {
    assert_eq!(page_count(0, 50), 1);
    assert_eq!(page_count(50, 50), 1);
    assert_eq!(page_count(51, 50), 2);
    assert_eq!(page_count(10, 0), 1);
}

#[test]
fn draft_converts_to_trimmed_payload() {
    let payload = filled_draft().to_payload().unwrap();
    assert_eq!(payload.title, "Sunny loft");
    assert_eq!(payload.price, 1200.0);
    assert_eq!(payload.rooms, 2);
    assert_eq!(payload.area, 54.5);
    assert_eq!(payload.floor, -1);
    assert_eq!(payload.category_id, None);
}

#[test]
fn draft_rejects_bad_numbers() {
    let mut draft = filled_draft();
    draft.price = "-5".to_owned();
    assert_eq!(draft.to_payload(), Err("Price must be a non-negative number"));

    let mut draft = filled_draft();
    draft.rooms = "2.5".to_owned();
    assert_eq!(draft.to_payload(), Err("Rooms must be a whole number"));

    let mut draft = filled_draft();
    draft.area = "NaN".to_owned();
    assert_eq!(draft.to_payload(), Err("Area must be a non-negative number"));
}

#[test]
fn draft_reports_first_missing_field() {
    let draft = ListingDraft::default();
    assert_eq!(draft.to_payload(), Err("Title is required"));
    assert_eq!(draft.image_url, crate::config::DEFAULT_IMAGE_URL);
}

#[test]
fn draft_prefills_from_listing() {
    let apt: Apartment = serde_json::from_value(json!({
        "id": "a1", "title": "Loft", "description": "Nice", "price": 900, "type": "sale",
        "city": "Rome", "address": "Via 1", "rooms": 3, "area": 70, "floor": 4, "imageUrl": "x.jpg"
    }))
    .unwrap();

    let draft = ListingDraft::from_apartment(&apt);

    assert_eq!(draft.price, "900");
    assert_eq!(draft.listing_type, ListingType::Sale);
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.rooms, 3);
    assert_eq!(payload.image_url, "x.jpg");
}

#[test]
fn login_and_register_validation() {
    assert_eq!(validate_login("", "pw"), Err("Email is required"));
    assert_eq!(validate_login("a@b.c", ""), Err("Password is required"));
    assert!(validate_login("a@b.c", "pw").is_ok());

    assert_eq!(validate_register(" ", "a@b.c", "pw"), Err("Name is required"));
    assert_eq!(validate_register("Ann", "nope", "pw"), Err("Enter a valid email address"));
    assert!(validate_register("Ann", "a@b.c", "pw").is_ok());
}

#[test]
fn contact_payload_skips_blank_optionals() {
    let payload = contact_payload("Ann", " ", "", "Call me").unwrap();
    assert_eq!(payload.name.as_deref(), Some("Ann"));
    assert_eq!(payload.phone, None);
    assert_eq!(payload.email, None);
    assert_eq!(contact_payload("Ann", "", "", "  "), Err("Message is required"));
}

#[test]
fn request_and_report_require_text() {
    assert_eq!(validate_request("", "hi"), Err("Phone is required"));
    assert_eq!(validate_request("+1555", "hi"), Ok(("+1555".to_owned(), "hi".to_owned())));
    assert_eq!(validate_report(" "), Err("Please describe the problem"));
    assert_eq!(validate_report(" spam "), Ok("spam".to_owned()));
}
