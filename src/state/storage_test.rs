use super::*;
use crate::net::types::Role;

fn user(token: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
        is_banned: false,
        token: token.map(str::to_owned),
    }
}

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

#[test]
fn read_is_none_when_nothing_stored() {
    assert_eq!(store().read(), None);
}

#[test]
fn write_then_read_round_trips_user() {
    let store = store();
    let u = user(Some("tok"));
    store.write(Some(&u));
    assert_eq!(store.read(), Some(u));
}

#[test]
fn write_none_removes_record() {
    let store = store();
    store.write(Some(&user(Some("tok"))));
    store.write(None);
    assert_eq!(store.read(), None);
    assert_eq!(store.backend().get_item(SESSION_STORAGE_KEY), None);
}

#[test]
fn malformed_payloads_read_as_none() {
    for raw in ["", "not json", "{", "null", "42", "[]", r#"{"id":"u1"}"#, r#"{"name":1,"id":2}"#] {
        let backend = MemoryStorage::new();
        backend.set_item(SESSION_STORAGE_KEY, raw);
        let store = SessionStore::new(backend);
        assert_eq!(store.read(), None, "payload {raw:?} should be ignored");
    }
}

#[test]
fn record_uses_rentify_user_key() {
    let store = store();
    store.write(Some(&user(None)));
    assert!(store.backend().get_item("rentify_user").is_some());
}

#[test]
fn token_reads_from_stored_user() {
    let store = store();
    assert_eq!(store.token(), None);
    store.write(Some(&user(Some("abc"))));
    assert_eq!(store.token().as_deref(), Some("abc"));
    store.write(Some(&user(Some(""))));
    assert_eq!(store.token(), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v");
    assert_eq!(b.get_item("k").as_deref(), Some("v"));
    assert!(b.remove_item("k"));
    assert_eq!(a.get_item("k"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let local = LocalStorage;
    assert!(!local.set_item("k", "v"));
    assert!(!local.remove_item("k"));
    assert_eq!(local.get_item("k"), None);
}

/// Backend that accepts writes but refuses to delete.
#[derive(Clone, Default)]
struct StickyStorage(MemoryStorage);

impl KeyValueStore for StickyStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.0.set_item(key, value)
    }

    fn remove_item(&self, _key: &str) -> bool {
        false
    }
}

#[test]
fn failed_clear_leaves_record_and_does_not_panic() {
    let store = SessionStore::new(StickyStorage::default());
    store.write(Some(&user(Some("abc"))));

    store.write(None);

    assert_eq!(store.read(), Some(user(Some("abc"))));
}
