use super::*;

use crate::net::types::UserRole;

fn seller() -> User {
    serde_json::from_str(
        r#"{"id":"u-1","name":"Yasmina","email":"a@b.com","role":"ROLE_SELLER"}"#,
    )
    .unwrap()
}

// =============================================================
// State shape
// =============================================================

#[test]
fn default_state_is_resolving_with_no_user() {
    let state = AuthState::default();
    assert!(state.is_resolving());
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_with_a_user_is_authenticated() {
    let state = AuthState::resolved(Some(seller()));
    assert!(state.is_authenticated());
    assert_eq!(state.user().unwrap().role, UserRole::Seller);
}

#[test]
fn resolved_without_a_user_is_anonymous() {
    let state = AuthState::resolved(None);
    assert_eq!(state, AuthState::Anonymous);
    assert!(state.user().is_none());
    assert!(!state.is_resolving());
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn guard_waits_while_resolving() {
    // No redirect may happen before the startup check settles, whatever the
    // eventual outcome.
    assert_eq!(AuthState::Resolving.guard(), GuardOutcome::Wait);
}

#[test]
fn guard_redirects_anonymous_visitors() {
    assert_eq!(AuthState::Anonymous.guard(), GuardOutcome::RedirectToLogin);
}

#[test]
fn guard_admits_authenticated_users() {
    assert_eq!(AuthState::Authenticated(seller()).guard(), GuardOutcome::Allow);
}
