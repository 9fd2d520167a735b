use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::mock::MockTransport;
use crate::net::types::{Role, User};
use crate::state::storage::MemoryStorage;

fn client(base: &str) -> ApiClient<MockTransport, MemoryStorage> {
    ApiClient::new(ApiConfig::new(base), SessionStore::new(MemoryStorage::new()), MockTransport::new())
}

fn stored_user(token: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
        is_banned: false,
        token: Some(token.to_owned()),
    }
}

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse { status, status_text: String::new(), body: body.to_owned() }
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn anonymous_request_has_json_header_only() {
    let api = client("");
    let req = api.build_request(Method::Get, "/api/apartments", None);
    assert_eq!(req.url, "/api/apartments");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("authorization"), None);
}

#[test]
fn stored_token_becomes_bearer_header() {
    let api = client("https://api.example.com/");
    api.store().write(Some(&stored_user("tok-1")));
    let req = api.build_request(Method::Post, "/api/contact", Some("{}".to_owned()));
    assert_eq!(req.url, "https://api.example.com/api/contact");
    assert_eq!(req.header("Authorization"), Some("Bearer tok-1"));
    assert_eq!(req.body.as_deref(), Some("{}"));
}

#[test]
fn token_is_read_at_call_time() {
    let api = client("");
    api.store().write(Some(&stored_user("old")));
    api.store().write(None);
    let req = api.build_request(Method::Get, "/api/users/me", None);
    assert_eq!(req.header("Authorization"), None);
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn no_content_resolves_to_unit_without_parsing() {
    let resp = response(204, "this is not json");
    let out: Result<(), ApiError> = decode_response(&resp);
    assert_eq!(out, Ok(()));
}

#[test]
fn no_content_resolves_to_none_for_optional_results() {
    let out: Result<Option<User>, ApiError> = decode_response(&response(204, ""));
    assert_eq!(out, Ok(None));
}

#[test]
fn failure_surfaces_body_error_message() {
    let resp = response(401, r#"{"error":"Invalid credentials"}"#);
    let err = decode_response::<User>(&resp).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn success_with_wrong_shape_is_an_error() {
    let err = decode_response::<User>(&response(200, r#"{"unexpected":true}"#)).unwrap_err();
    assert_eq!(err.status(), Some(200));
    assert!(err.message().starts_with("invalid response body"));
}

#[test]
fn send_reports_transport_failures() {
    let api = client("");
    api.transport().fail("connection refused");
    let err = block_on(api.get::<User>("/api/users/me")).unwrap_err();
    assert_eq!(err, ApiError::transport("connection refused"));
}

#[test]
fn delete_accepts_no_content() {
    let api = client("");
    api.transport().respond(204, "");
    assert_eq!(block_on(api.delete("/api/requests/r1")), Ok(()));
    assert_eq!(api.transport().last_request().method, Method::Delete);
}

#[test]
fn delete_ignores_acknowledgement_body() {
    let api = client("");
    api.transport().respond_json(200, &json!({ "success": true }));
    assert_eq!(block_on(api.delete("/api/apartments/a1")), Ok(()));
}

#[test]
fn patch_without_body_sends_none() {
    let api = client("");
    api.transport().respond_json(200, &json!({ "ok": true }));
    let _: serde_json::Value = block_on(api.patch("/api/admin/reports/1/resolve", None)).unwrap();
    assert_eq!(api.transport().last_request().body, None);
}

// =============================================================
// Query strings
// =============================================================

#[test]
fn query_skips_absent_and_blank_values() {
    let query = QueryString::new()
        .text("city", Some(""))
        .value("rooms", None::<u32>)
        .value("minPrice", Some(500));
    assert_eq!(query.apply("/api/apartments"), "/api/apartments?minPrice=500");
}

#[test]
fn empty_query_leaves_path_untouched() {
    assert_eq!(QueryString::new().text("status", None).apply("/api/admin/reports"), "/api/admin/reports");
}

#[test]
fn query_values_are_percent_encoded() {
    let query = QueryString::new().text("city", Some("New York & Co"));
    assert_eq!(query.encode(), "city=New%20York%20%26%20Co");
}
