use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::UserProfile;
use crate::session::storage::{MemoryStorage, SessionStorage};

fn manager() -> (SessionManager, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (SessionManager::new(storage.clone()), storage)
}

fn profile(avatar: Option<&str>) -> UserProfile {
    UserProfile {
        name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        avatar: avatar.map(str::to_owned),
    }
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn starts_unauthenticated() {
    let (manager, _storage) = manager();
    assert!(manager.token().is_none());
    assert!(!manager.is_authenticated());
    assert_eq!(manager.snapshot(), Session::default());
}

#[test]
fn snapshot_reports_authentication_from_its_token() {
    // UI code holding a `Session` snapshot decides what to render from
    // the snapshot alone, without a storage read.
    let (manager, _storage) = manager();
    assert!(!manager.snapshot().is_authenticated());

    manager.set_token("abc");
    assert!(manager.snapshot().is_authenticated());

    manager.logout();
    assert!(!manager.snapshot().is_authenticated());
}

#[test]
fn set_token_persists_and_authenticates() {
    let (manager, storage) = manager();
    manager.set_token("abc");
    assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(manager.token(), Some("abc".to_owned()));
    assert!(manager.is_authenticated());
}

#[test]
fn token_reads_are_fresh_not_captured() {
    // A token written to storage after the manager was built is still
    // observed: reads go to the backend on every call.
    let (manager, storage) = manager();
    assert!(manager.token().is_none());
    storage.set(TOKEN_KEY, "late");
    assert_eq!(manager.token(), Some("late".to_owned()));
}

#[test]
fn hydrates_state_from_storage_on_startup() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "persisted");
    storage.set(NAME_KEY, "Ana");
    storage.set(EMAIL_KEY, "a@x.com");

    let manager = SessionManager::new(storage);
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.token, Some("persisted".to_owned()));
    assert_eq!(snapshot.user.name, "Ana");
    assert_eq!(snapshot.user.email, "a@x.com");
    assert!(snapshot.user.avatar.is_none());
}

// =============================================================
// Profile application
// =============================================================

#[test]
fn apply_profile_overwrites_all_fields_and_persists() {
    let (manager, storage) = manager();
    manager.apply_profile(&profile(Some("https://cdn/a.png")));

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.user, profile(Some("https://cdn/a.png")));
    assert_eq!(storage.get(NAME_KEY), Some("Ana".to_owned()));
    assert_eq!(storage.get(EMAIL_KEY), Some("a@x.com".to_owned()));
    assert_eq!(storage.get(AVATAR_KEY), Some("https://cdn/a.png".to_owned()));
}

#[test]
fn apply_profile_without_avatar_writes_no_avatar_key() {
    let (manager, storage) = manager();
    manager.apply_profile(&profile(None));
    assert!(!storage.contains(AVATAR_KEY));
}

#[test]
fn apply_profile_removes_stale_avatar() {
    let (manager, storage) = manager();
    manager.apply_profile(&profile(Some("https://cdn/a.png")));
    manager.apply_profile(&profile(None));
    assert!(!storage.contains(AVATAR_KEY));
    assert!(manager.snapshot().user.avatar.is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_session_and_owned_keys() {
    let (manager, storage) = manager();
    manager.set_token("abc");
    manager.apply_profile(&profile(Some("https://cdn/a.png")));

    manager.logout();

    assert_eq!(manager.snapshot(), Session::default());
    for key in OWNED_KEYS {
        assert!(!storage.contains(key), "key {key} should be gone");
    }
}

#[test]
fn logout_leaves_foreign_keys_alone() {
    let (manager, storage) = manager();
    storage.set("theme", "dark");
    manager.set_token("abc");

    manager.logout();

    assert_eq!(storage.get("theme"), Some("dark".to_owned()));
}

// =============================================================
// Change notification
// =============================================================

#[test]
fn on_change_receives_a_snapshot_per_mutation() {
    let (manager, _storage) = manager();
    let seen: Arc<Mutex<Vec<Session>>> = Arc::new(Mutex::new(Vec::new()));
    {
        let seen = seen.clone();
        manager.on_change(move |session| {
            seen.lock().expect("test lock").push(session.clone());
        });
    }

    manager.set_token("abc");
    manager.apply_profile(&profile(None));
    manager.logout();

    let seen = seen.lock().expect("test lock");
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].token, Some("abc".to_owned()));
    assert_eq!(seen[1].user.name, "Ana");
    assert_eq!(seen[2], Session::default());
}

#[test]
fn clones_share_state() {
    let (manager, _storage) = manager();
    let other = manager.clone();
    manager.set_token("abc");
    assert_eq!(other.token(), Some("abc".to_owned()));
}
