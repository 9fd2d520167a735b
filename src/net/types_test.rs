use super::*;
use serde_json::json;

fn apartment_json() -> serde_json::Value {
    json!({
        "id": "a1",
        "title": "Loft",
        "description": "Bright loft",
        "price": 1200,
        "type": "rent",
        "city": "Almaty",
        "address": "Abay 1",
        "rooms": 2,
        "area": 54.5,
        "floor": 3,
        "imageUrl": "https://img/1.jpg",
        "ownerId": "u1"
    })
}

// =============================================================
// User
// =============================================================

#[test]
fn user_defaults_role_and_ban_flag() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "name": "Ann", "email": "a@x.io" })).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_banned);
    assert_eq!(user.token, None);
    assert!(!user.has_token());
}

#[test]
fn user_reads_camel_case_fields() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "name": "Ann",
        "email": "a@x.io",
        "role": "admin",
        "isBanned": true,
        "token": "t-1"
    }))
    .unwrap();
    assert!(user.is_admin());
    assert!(user.is_banned);
    assert!(user.has_token());
}

#[test]
fn empty_token_does_not_count() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: String::new(),
        role: Role::User,
        is_banned: false,
        token: Some(String::new()),
    };
    assert!(!user.has_token());
}

#[test]
fn user_without_token_omits_field_when_serialized() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "a@x.io".to_owned(),
        role: Role::Admin,
        is_banned: false,
        token: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value.get("token"), None);
    assert_eq!(value["role"], "admin");
    assert_eq!(value["isBanned"], false);
}

#[test]
fn role_toggles_between_user_and_admin() {
    assert_eq!(Role::User.toggled(), Role::Admin);
    assert_eq!(Role::Admin.toggled(), Role::User);
}

// =============================================================
// Apartment
// =============================================================

#[test]
fn apartment_defaults_moderation_fields() {
    let apt: Apartment = serde_json::from_value(apartment_json()).unwrap();
    assert_eq!(apt.listing_type, ListingType::Rent);
    assert_eq!(apt.status, ModerationStatus::Pending);
    assert!(!apt.is_hidden);
    assert_eq!(apt.category_id, None);
    assert_eq!(apt.owner_id.as_deref(), Some("u1"));
}

#[test]
fn apartment_accepts_integer_valued_floats() {
    let mut raw = apartment_json();
    raw["rooms"] = json!(3.0);
    raw["floor"] = json!(-1.0);
    let apt: Apartment = serde_json::from_value(raw).unwrap();
    assert_eq!(apt.rooms, 3);
    assert_eq!(apt.floor, -1);
}

#[test]
fn apartment_rejects_fractional_rooms() {
    let mut raw = apartment_json();
    raw["rooms"] = json!(2.5);
    assert!(serde_json::from_value::<Apartment>(raw).is_err());
}

#[test]
fn apartment_payload_uses_type_and_camel_case_keys() {
    let payload = ApartmentPayload {
        title: "Loft".to_owned(),
        description: String::new(),
        price: 900.0,
        listing_type: ListingType::Sale,
        city: "Astana".to_owned(),
        address: "Main 2".to_owned(),
        rooms: 1,
        area: 30.0,
        floor: 2,
        image_url: "img".to_owned(),
        category_id: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["type"], "sale");
    assert_eq!(value["imageUrl"], "img");
    assert_eq!(value.get("categoryId"), None);
}

#[test]
fn listing_type_parse_accepts_known_values_only() {
    assert_eq!(ListingType::parse("rent"), Some(ListingType::Rent));
    assert_eq!(ListingType::parse(" sale "), Some(ListingType::Sale));
    assert_eq!(ListingType::parse(""), None);
    assert_eq!(ListingType::parse("lease"), None);
}

// =============================================================
// Requests, messages, reports
// =============================================================

#[test]
fn contact_request_tolerates_missing_requester() {
    let request: ContactRequest = serde_json::from_value(json!({
        "id": "r1",
        "apartment": apartment_json(),
        "phone": "+1555",
        "message": "hi"
    }))
    .unwrap();
    assert_eq!(request.from_user, RequesterIdentity::default());
    assert_eq!(request.created_at, None);
}

#[test]
fn contact_message_payload_omits_empty_optionals() {
    let payload = ContactMessagePayload { message: "Hello".to_owned(), ..ContactMessagePayload::default() };
    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "message": "Hello" }));
}

#[test]
fn report_item_allows_null_references() {
    let report: ReportItem = serde_json::from_value(json!({
        "id": "rep1",
        "apartment": null,
        "reporter": null,
        "reason": "spam",
        "status": "resolved"
    }))
    .unwrap();
    assert_eq!(report.apartment, None);
    assert_eq!(report.status, ReportStatus::Resolved);
}

#[test]
fn admin_stats_missing_counters_read_as_zero() {
    let stats: AdminStats = serde_json::from_value(json!({ "users": 4, "openReports": 2 })).unwrap();
    assert_eq!(stats.users, 4);
    assert_eq!(stats.open_reports, 2);
    assert_eq!(stats.approved_visible, 0);
}

#[test]
fn items_envelope_defaults_to_empty() {
    let items: Items<User> = serde_json::from_value(json!({})).unwrap();
    assert!(items.items.is_empty());
}
