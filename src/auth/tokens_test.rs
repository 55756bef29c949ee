use super::*;

// =============================================================
// MemoryTokens basics
// =============================================================

#[test]
fn empty_store_has_no_tokens() {
    let store = MemoryTokens::new();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn set_and_read_back_each_token() {
    let store = MemoryTokens::new();
    store.set_access_token("AT1");
    store.set_refresh_token("RT1");
    assert_eq!(store.access_token().as_deref(), Some("AT1"));
    assert_eq!(store.refresh_token().as_deref(), Some("RT1"));
}

#[test]
fn clearing_one_token_leaves_the_other() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    store.clear_access_token();
    assert!(store.access_token().is_none());
    assert_eq!(store.refresh_token().as_deref(), Some("RT1"));
}

// =============================================================
// Pair semantics
// =============================================================

#[test]
fn store_pair_sets_both_tokens() {
    let store = MemoryTokens::new();
    store.store_pair("AT1", "RT1");
    assert_eq!(store.access_token().as_deref(), Some("AT1"));
    assert_eq!(store.refresh_token().as_deref(), Some("RT1"));
}

#[test]
fn store_pair_overwrites_previous_pair() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    store.store_pair("AT2", "RT2");
    assert_eq!(store.access_token().as_deref(), Some("AT2"));
    assert_eq!(store.refresh_token().as_deref(), Some("RT2"));
}

#[test]
fn clear_removes_both_tokens() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    store.clear();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn reads_are_idempotent() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    for _ in 0..3 {
        assert_eq!(store.access_token().as_deref(), Some("AT1"));
    }
    store.clear();
    for _ in 0..3 {
        assert!(store.access_token().is_none());
    }
}

// =============================================================
// Browser store outside the browser
// =============================================================

#[test]
fn browser_store_is_inert_without_a_window() {
    let store = BrowserTokens;
    store.set_access_token("AT1");
    assert!(store.access_token().is_none());
    store.clear();
    assert!(store.refresh_token().is_none());
}
