use serde_json::json;

use super::*;
use crate::net::types::Role;

fn user(id: &str, role: Role, token: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        name: "Someone".to_owned(),
        email: String::new(),
        role,
        is_banned: false,
        token: token.map(str::to_owned),
    }
}

fn signed_in(role: Role) -> SessionState {
    SessionState::restored(Some(user("u1", role, Some("tok"))))
}

fn owned_by(owner: Option<&str>) -> Apartment {
    serde_json::from_value(json!({ "id": "a1", "title": "Loft", "price": 1, "ownerId": owner })).unwrap()
}

#[test]
fn authenticated_guard_redirects_anonymous_to_login() {
    let state = SessionState::default();
    assert_eq!(GuardKind::Authenticated.evaluate(&state), GuardDecision::Redirect("/login"));
}

#[test]
fn authenticated_guard_allows_user_with_token() {
    assert_eq!(GuardKind::Authenticated.evaluate(&signed_in(Role::User)), GuardDecision::Allow);
}

#[test]
fn tokenless_user_is_not_authenticated() {
    let state = SessionState::restored(Some(user("u1", Role::Admin, Some(""))));
    assert_eq!(GuardKind::Authenticated.evaluate(&state), GuardDecision::Redirect("/login"));
}

#[test]
fn admin_guard_sends_regular_users_home() {
    assert_eq!(GuardKind::Admin.evaluate(&signed_in(Role::User)), GuardDecision::Redirect("/"));
}

#[test]
fn admin_guard_sends_anonymous_home() {
    assert_eq!(GuardKind::Admin.evaluate(&SessionState::default()), GuardDecision::Redirect("/"));
}

#[test]
fn admin_guard_allows_admins() {
    assert_eq!(GuardKind::Admin.evaluate(&signed_in(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn owner_and_admin_can_manage_listing() {
    let apt = owned_by(Some("u1"));
    assert!(can_manage_listing(Some(&user("u1", Role::User, Some("t"))), &apt));
    assert!(can_manage_listing(Some(&user("boss", Role::Admin, Some("t"))), &apt));
    assert!(!can_manage_listing(Some(&user("u2", Role::User, Some("t"))), &apt));
    assert!(!can_manage_listing(None, &apt));
}

#[test]
fn unowned_listing_is_admin_only() {
    let apt = owned_by(None);
    assert!(!can_manage_listing(Some(&user("u1", Role::User, Some("t"))), &apt));
}

#[test]
fn admins_cannot_change_their_own_role() {
    let me = user("boss", Role::Admin, Some("t"));
    assert!(!can_change_role(&me, &me));
    assert!(can_change_role(&me, &user("u2", Role::User, None)));
    assert!(!can_change_role(&user("u2", Role::User, Some("t")), &me));
}

#[test]
fn pending_refresh_defers_redirect() {
    let mut state = SessionState::default();
    state.begin_refresh();
    assert_eq!(GuardKind::Authenticated.evaluate(&state), GuardDecision::Pending);
    assert_eq!(GuardKind::Admin.evaluate(&state), GuardDecision::Pending);

    state.finish_refresh();
    assert_eq!(GuardKind::Authenticated.evaluate(&state), GuardDecision::Redirect("/login"));
}

#[test]
fn pending_refresh_does_not_block_allowed_user() {
    let mut state = signed_in(Role::Admin);
    state.begin_refresh();
    assert_eq!(GuardKind::Admin.evaluate(&state), GuardDecision::Allow);
}
