use super::*;
use crate::storage::MemoryStorage;

// =============================================================
// Authentication status
// =============================================================

#[test]
fn default_has_no_session() {
    let store = UserStore::default();
    assert!(!store.is_authenticated());
    assert_eq!(store.user_id(), "");
}

#[test]
fn empty_nickname_still_authenticates() {
    let mut store = UserStore::default();
    store.set_user("u1", "", false);
    assert!(store.is_authenticated());
    assert_eq!(store.nickname(), "");
}

#[test]
fn set_user_overwrites_every_field() {
    let mut store = UserStore::default();
    store.set_user("u1", "mario", true);
    store.set_user("u2", "luigi", false);
    assert_eq!(
        store,
        UserStore {
            user_id: "u2".into(),
            nickname: "luigi".into(),
            is_admin: false,
        }
    );
}

#[test]
fn set_user_with_empty_id_is_unauthenticated() {
    let mut store = UserStore::default();
    store.set_user("u1", "mario", true);
    store.set_user("", "mario", true);
    assert!(!store.is_authenticated());
}

#[test]
fn admin_flag_requires_session() {
    let store = UserStore {
        user_id: String::new(),
        nickname: "ghost".into(),
        is_admin: true,
    };
    assert!(!store.is_admin());
}

#[test]
fn clear_drops_identity() {
    let mut store = UserStore::default();
    store.set_user("u1", "mario", true);
    store.clear();
    assert_eq!(store, UserStore::default());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn persisted_identity_survives_reload() {
    let backend = MemoryStorage::default();
    let mut store = UserStore::default();
    store.set_user("u1", "mario", true);
    assert!(store.persist(&backend));

    let restored = UserStore::load(&backend);
    assert_eq!(restored, store);
    assert!(restored.is_authenticated());
}

#[test]
fn persisting_empty_identity_removes_entry() {
    let backend = MemoryStorage::default();
    let mut store = UserStore::default();
    store.set_user("u1", "mario", false);
    store.persist(&backend);

    store.clear();
    store.persist(&backend);
    assert!(backend.load_raw(STORAGE_KEY).is_none());
    assert!(!UserStore::load(&backend).is_authenticated());
}

#[test]
fn corrupt_entry_loads_as_empty() {
    let backend = MemoryStorage::default();
    backend.save_raw(STORAGE_KEY, "{not json");
    assert_eq!(UserStore::load(&backend), UserStore::default());
}
