use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ApiConfig;
use crate::net::transport::mock::MockTransport;
use crate::net::transport::{HttpRequest, HttpResponse};
use crate::net::types::Role;
use crate::state::storage::{MemoryStorage, SessionStore};

fn alice(token: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
        is_banned: false,
        token: token.map(str::to_owned),
    }
}

fn session() -> SessionContext<MockTransport, MemoryStorage> {
    SessionContext::new(ApiClient::new(
        ApiConfig::new(""),
        SessionStore::new(MemoryStorage::new()),
        MockTransport::new(),
    ))
}

fn session_with_stored(user: &User) -> SessionContext<MockTransport, MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    store.write(Some(user));
    SessionContext::new(ApiClient::new(ApiConfig::new(""), store, MockTransport::new()))
}

#[test]
fn new_restores_remembered_user() {
    let ctx = session_with_stored(&alice(Some("tok")));
    let state = ctx.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(state.current_user().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn new_ignores_remembered_user_without_token() {
    let ctx = session_with_stored(&alice(None));
    assert_eq!(ctx.snapshot().user, None);
}

#[test]
fn set_user_persists_and_bumps_revision() {
    let ctx = session();
    let before = ctx.snapshot().revision();

    ctx.set_user(Some(alice(Some("tok"))));

    assert_eq!(ctx.api().store().token().as_deref(), Some("tok"));
    assert_eq!(ctx.snapshot().revision(), before + 1);
}

#[test]
fn set_user_without_token_signs_out() {
    let ctx = session_with_stored(&alice(Some("tok")));

    ctx.set_user(Some(alice(None)));

    assert_eq!(ctx.snapshot().user, None);
    assert_eq!(ctx.api().store().read(), None);
}

#[test]
fn login_installs_returned_user() {
    let ctx = session();
    ctx.api()
        .transport()
        .respond_json(200, &json!({ "id": "u1", "name": "Alice", "role": "admin", "token": "tok" }));

    let user = block_on(ctx.login("alice@example.com", "secret")).unwrap();

    assert!(user.is_admin());
    assert!(ctx.snapshot().is_admin());
    assert_eq!(ctx.api().store().read(), Some(user));
}

#[test]
fn failed_register_leaves_session_untouched() {
    let ctx = session();
    ctx.api().transport().respond(409, r#"{"message":"Email already registered"}"#);

    let err = block_on(ctx.register("Alice", "alice@example.com", "secret")).unwrap_err();

    assert_eq!(err.message(), "Email already registered");
    assert_eq!(ctx.snapshot().user, None);
}

#[test]
fn logout_clears_state_and_store() {
    let ctx = session_with_stored(&alice(Some("tok")));
    ctx.logout();
    assert!(!ctx.snapshot().is_authenticated());
    assert_eq!(ctx.api().store().read(), None);
}

#[test]
fn refresh_without_stored_token_sends_nothing() {
    let ctx = session();
    block_on(ctx.refresh_profile());
    assert!(ctx.api().transport().requests().is_empty());
    assert!(!ctx.snapshot().is_refreshing());
}

#[test]
fn refresh_merges_profile_and_keeps_token() {
    let ctx = session_with_stored(&alice(Some("tok")));
    ctx.api().transport().respond_json(
        200,
        &json!({ "id": "u1", "name": "Alice Renamed", "email": "alice@example.com", "role": "admin" }),
    );

    block_on(ctx.refresh_profile());

    let state = ctx.snapshot();
    let user = state.current_user().unwrap();
    assert_eq!(user.name, "Alice Renamed");
    assert_eq!(user.token.as_deref(), Some("tok"));
    assert!(state.is_admin());
    assert!(!state.is_refreshing());
    assert_eq!(ctx.api().store().read().unwrap().name, "Alice Renamed");
    assert_eq!(ctx.api().transport().last_request().header("Authorization"), Some("Bearer tok"));
}

#[test]
fn refresh_failure_signs_out() {
    let ctx = session_with_stored(&alice(Some("expired")));
    ctx.api().transport().respond(401, r#"{"error":"Invalid token"}"#);

    block_on(ctx.refresh_profile());

    assert_eq!(ctx.snapshot().user, None);
    assert_eq!(ctx.api().store().read(), None);
}

#[test]
fn refresh_network_failure_signs_out() {
    let ctx = session_with_stored(&alice(Some("tok")));
    ctx.api().transport().fail("offline");
    block_on(ctx.refresh_profile());
    assert_eq!(ctx.snapshot().user, None);
}

#[test]
fn merge_profile_takes_fields_from_profile() {
    let mut profile = alice(None);
    profile.is_banned = true;
    let merged = merge_profile(&alice(Some("tok")), profile);
    assert!(merged.is_banned);
    assert_eq!(merged.token.as_deref(), Some("tok"));
}

type Hook = Box<dyn FnOnce() + Send>;

/// Runs a hook while the request is "in flight", then answers with a fixed
/// response.
#[derive(Clone, Default)]
struct InterleavingTransport {
    hook: Arc<Mutex<Option<Hook>>>,
    response: Arc<Mutex<Option<HttpResponse>>>,
}

impl std::fmt::Debug for InterleavingTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InterleavingTransport")
    }
}

impl Transport for InterleavingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let hook = self.hook.lock().unwrap().take();
        if let Some(hook) = hook {
            hook();
        }
        self.response
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ApiError::transport("no scripted response"))
    }
}

#[test]
fn refresh_outcome_discarded_after_newer_sign_in() {
    let store = SessionStore::new(MemoryStorage::new());
    store.write(Some(&alice(Some("old"))));
    let transport = InterleavingTransport::default();
    *transport.response.lock().unwrap() = Some(HttpResponse {
        status: 401,
        status_text: "Unauthorized".to_owned(),
        body: String::new(),
    });
    let ctx = SessionContext::new(ApiClient::new(ApiConfig::new(""), store, transport.clone()));

    let racing = ctx.clone();
    *transport.hook.lock().unwrap() = Some(Box::new(move || {
        racing.set_user(Some(alice(Some("new"))));
    }));

    block_on(ctx.refresh_profile());

    let state = ctx.snapshot();
    assert_eq!(state.current_user().and_then(|u| u.token.as_deref()), Some("new"));
    assert!(!state.is_refreshing());
    assert_eq!(ctx.api().store().token().as_deref(), Some("new"));
}
