use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ApiConfig;
use crate::net::transport::Method;
use crate::net::transport::mock::MockTransport;
use crate::state::storage::{MemoryStorage, SessionStore};

fn client() -> ApiClient<MockTransport, MemoryStorage> {
    ApiClient::new(ApiConfig::new(""), SessionStore::new(MemoryStorage::new()), MockTransport::new())
}

fn user_json(token: Option<&str>) -> serde_json::Value {
    let mut user = json!({ "id": "u1", "name": "Alice", "email": "alice@example.com", "role": "user" });
    if let Some(token) = token {
        user["token"] = json!(token);
    }
    user
}

#[test]
fn login_posts_credentials_and_persists_user() {
    let api = client();
    api.transport().respond_json(200, &user_json(Some("tok")));

    let user = block_on(api.auth().login("alice@example.com", "secret")).unwrap();

    assert_eq!(user.token.as_deref(), Some("tok"));
    assert_eq!(api.store().read(), Some(user));
    let req = api.transport().last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, LOGIN_PATH);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "alice@example.com", "password": "secret" }));
}

#[test]
fn failed_login_surfaces_message_and_keeps_store_empty() {
    let api = client();
    api.transport().respond(401, r#"{"error":"Invalid credentials"}"#);

    let err = block_on(api.auth().login("alice@example.com", "wrong")).unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(api.store().read(), None);
}

#[test]
fn register_posts_name_and_persists_user() {
    let api = client();
    api.transport().respond_json(201, &user_json(Some("fresh")));

    let user = block_on(api.auth().register("Alice", "alice@example.com", "secret")).unwrap();

    assert_eq!(api.store().token().as_deref(), Some("fresh"));
    assert_eq!(user.name, "Alice");
    let req = api.transport().last_request();
    assert_eq!(req.url, REGISTER_PATH);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "Alice");
}

#[test]
fn login_token_authorizes_following_calls() {
    let api = client();
    api.transport().respond_json(200, &user_json(Some("tok")));
    api.transport().respond_json(200, &user_json(None));

    block_on(api.auth().login("alice@example.com", "secret")).unwrap();
    let profile = block_on(api.users().me()).unwrap();

    assert_eq!(profile.token, None);
    let req = api.transport().last_request();
    assert_eq!(req.url, ME_PATH);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.header("Authorization"), Some("Bearer tok"));
}
