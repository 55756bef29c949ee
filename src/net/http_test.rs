use super::*;

use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

use crate::auth::tokens::MemoryTokens;

/// Transport double: replays scripted responses in order and records every
/// request it was handed.
struct Script {
    responses: RefCell<Vec<Result<RawResponse, ApiError>>>,
    seen: RefCell<Vec<PreparedRequest>>,
}

impl Script {
    fn new(responses: Vec<Result<RawResponse, ApiError>>) -> Self {
        Self {
            responses: RefCell::new(responses),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn transport(&self) -> impl Fn(PreparedRequest) -> std::future::Ready<Result<RawResponse, ApiError>> + '_ {
        move |request: PreparedRequest| {
            self.seen.borrow_mut().push(request);
            let mut responses = self.responses.borrow_mut();
            assert!(!responses.is_empty(), "transport called more times than scripted");
            std::future::ready(responses.remove(0))
        }
    }

    fn calls(&self) -> Vec<PreparedRequest> {
        self.seen.borrow().clone()
    }
}

fn ok(body: &str) -> Result<RawResponse, ApiError> {
    Ok(RawResponse { status: 200, body: body.to_owned() })
}

fn status(code: u16, body: &str) -> Result<RawResponse, ApiError> {
    Ok(RawResponse { status: code, body: body.to_owned() })
}

fn refresh_ok() -> Result<RawResponse, ApiError> {
    ok(r#"{"accessToken":"AT2","refreshToken":"RT2"}"#)
}

// =============================================================
// Request preparation
// =============================================================

#[test]
fn attaches_bearer_when_access_token_present() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![ok("{}")]);

    block_on(send_with(&store, &script.transport(), &ApiRequest::get("/hotels"), true)).unwrap();

    let calls = script.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].bearer.as_deref(), Some("AT1"));
    assert_eq!(calls[0].url, format!("{}/hotels", base_url()));
    assert_eq!(calls[0].method, Method::Get);
    assert!(calls[0].body.is_none());
}

#[test]
fn sends_no_bearer_when_store_empty() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![ok("{}")]);

    block_on(send_with(&store, &script.transport(), &ApiRequest::get("/hotels"), true)).unwrap();

    assert!(script.calls()[0].bearer.is_none());
}

#[test]
fn serializes_json_body() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![ok("{}")]);
    let request = ApiRequest::post("/auth/login", json!({"email": "a@b.com"}));

    block_on(send_with(&store, &script.transport(), &request, true)).unwrap();

    let body: serde_json::Value =
        serde_json::from_str(script.calls()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], "a@b.com");
}

// =============================================================
// Response handling
// =============================================================

#[test]
fn returns_parsed_body_on_success() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![ok(r#"{"id":"h-1","name":"Riad"}"#)]);

    let value =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/hotels/h-1"), true))
            .unwrap();

    assert_eq!(value["name"], "Riad");
}

#[test]
fn empty_success_body_parses_as_null() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![ok("")]);

    let value =
        block_on(send_with(&store, &script.transport(), &ApiRequest::post_empty("/auth/logout"), true))
            .unwrap();

    assert!(value.is_null());
}

#[test]
fn server_error_carries_message_field() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![status(422, r#"{"message":"email already taken"}"#)]);

    let err = block_on(send_with(
        &store,
        &script.transport(),
        &ApiRequest::post("/auth/register", json!({})),
        true,
    ))
    .unwrap_err();

    assert_eq!(err, ApiError::Server { status: 422, message: "email already taken".to_owned() });
}

#[test]
fn server_error_without_message_uses_generic_text() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![status(500, "not json")]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/hotels"), true))
            .unwrap_err();

    assert_eq!(err, ApiError::Server { status: 500, message: "API request failed".to_owned() });
}

#[test]
fn network_error_propagates_without_retry() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![Err(ApiError::Network("connection reset".to_owned()))]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/hotels"), true))
            .unwrap_err();

    assert_eq!(err, ApiError::Network("connection reset".to_owned()));
    assert_eq!(script.calls().len(), 1);
    // Tokens untouched by a transport failure.
    assert_eq!(store.access_token().as_deref(), Some("AT1"));
}

// =============================================================
// Refresh-and-retry protocol
// =============================================================

#[test]
fn unauthorized_with_refresh_token_retries_once_with_new_token() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![
        status(401, "{}"),
        refresh_ok(),
        ok(r#"{"items":[]}"#),
    ]);

    let value =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/events"), true))
            .unwrap();

    assert_eq!(value["items"], json!([]));

    let calls = script.calls();
    assert_eq!(calls.len(), 3);
    // Original call with the stale token.
    assert_eq!(calls[0].bearer.as_deref(), Some("AT1"));
    // Refresh call: unauthenticated POST carrying the refresh token.
    assert_eq!(calls[1].url, format!("{}/auth/refresh-token", base_url()));
    assert_eq!(calls[1].method, Method::Post);
    assert!(calls[1].bearer.is_none());
    assert!(calls[1].body.as_deref().unwrap().contains("RT1"));
    // Retried call with the fresh token.
    assert_eq!(calls[2].bearer.as_deref(), Some("AT2"));
    assert_eq!(calls[2].url, calls[0].url);

    // Store now holds the rotated pair.
    assert_eq!(store.access_token().as_deref(), Some("AT2"));
    assert_eq!(store.refresh_token().as_deref(), Some("RT2"));
}

#[test]
fn forbidden_also_enters_the_refresh_path() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![status(403, "{}"), refresh_ok(), ok("{}")]);

    block_on(send_with(&store, &script.transport(), &ApiRequest::get("/statistics/dashboard"), true))
        .unwrap();

    assert_eq!(script.calls().len(), 3);
}

#[test]
fn second_unauthorized_does_not_trigger_a_third_attempt() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![status(401, "{}"), refresh_ok(), status(401, "{}")]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/events"), true))
            .unwrap_err();

    // The retried call's 401 surfaces as a plain server error; no second
    // refresh, no third attempt.
    assert!(matches!(err, ApiError::Server { status: 401, .. }));
    assert_eq!(script.calls().len(), 3);
}

#[test]
fn unauthorized_without_refresh_token_fails_immediately() {
    let store = MemoryTokens::new();
    store.set_access_token("AT1");
    let script = Script::new(vec![status(401, "{}")]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/events"), true))
            .unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 401, .. }));
    assert_eq!(script.calls().len(), 1);
}

#[test]
fn failed_refresh_clears_both_tokens_and_reports_session_expired() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![status(401, "{}"), status(401, "{}")]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/events"), true))
            .unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert_eq!(script.calls().len(), 2);
}

#[test]
fn incomplete_refresh_payload_counts_as_failure() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![status(401, "{}"), ok(r#"{"accessToken":"AT2"}"#)]);

    let err =
        block_on(send_with(&store, &script.transport(), &ApiRequest::get("/events"), true))
            .unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

// =============================================================
// refresh_tokens on its own
// =============================================================

#[test]
fn refresh_without_stored_token_is_session_expired() {
    let store = MemoryTokens::new();
    let script = Script::new(vec![]);

    let err = block_on(refresh_tokens(&store, &script.transport())).unwrap_err();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(script.calls().is_empty());
}

#[test]
fn successful_refresh_persists_the_new_pair() {
    let store = MemoryTokens::with_pair("AT1", "RT1");
    let script = Script::new(vec![refresh_ok()]);

    let access = block_on(refresh_tokens(&store, &script.transport())).unwrap();

    assert_eq!(access, "AT2");
    assert_eq!(store.access_token().as_deref(), Some("AT2"));
    assert_eq!(store.refresh_token().as_deref(), Some("RT2"));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn base_url_defaults_to_local_backend() {
    // Only meaningful when no override was baked in at compile time.
    if option_env!("MYSTIG_API_URL").is_none() {
        assert_eq!(base_url(), "http://localhost:8080/api");
    }
}
