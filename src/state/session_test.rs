use super::*;

fn sample_user() -> User {
    User {
        email: "nurse@cityhospital.org".to_owned(),
        hospital_name: Some("City Hospital".to_owned()),
    }
}

// =============================================================
// Token presence
// =============================================================

#[test]
fn fresh_session_is_unauthenticated() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let store = Arc::new(MemoryStorage::new());
    store.set(TOKEN_KEY, "");
    let session = Session::new(store);
    assert!(!session.is_authenticated());
}

#[test]
fn store_writes_token_and_user_under_expected_keys() {
    let store = Arc::new(MemoryStorage::new());
    let session = Session::new(store.clone());
    session.store("abc", &sample_user());

    assert_eq!(store.get("access_token").as_deref(), Some("abc"));
    let raw = store.get("user").expect("user key written");
    let decoded: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded["email"], "nurse@cityhospital.org");
    assert_eq!(decoded["hospital_name"], "City Hospital");
    assert!(session.is_authenticated());
    assert_eq!(session.user(), Some(sample_user()));
}

#[test]
fn clones_share_backing_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.store("abc", &sample_user());
    assert_eq!(other.token().as_deref(), Some("abc"));
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_token_keeps_user_record() {
    let session = Session::in_memory();
    session.store("abc", &sample_user());
    session.clear_token();
    assert!(!session.is_authenticated());
    assert_eq!(session.user(), Some(sample_user()));
}

#[test]
fn logout_removes_token_and_user() {
    let session = Session::in_memory();
    session.store("abc", &sample_user());
    session.logout();
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
}

// =============================================================
// User decoding
// =============================================================

#[test]
fn malformed_user_json_reads_as_absent() {
    let store = Arc::new(MemoryStorage::new());
    store.set(USER_KEY, "{not json");
    let session = Session::new(store);
    assert_eq!(session.user(), None);
}

#[test]
fn user_without_hospital_name_decodes() {
    let store = Arc::new(MemoryStorage::new());
    store.set(USER_KEY, r#"{"email":"a@b.com","id":7}"#);
    let session = Session::new(store);
    assert_eq!(
        session.user(),
        Some(User { email: "a@b.com".to_owned(), hospital_name: None })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = LocalStorage;
    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY), None);
    store.remove(TOKEN_KEY);
}
