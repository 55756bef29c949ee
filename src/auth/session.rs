//! Session operations layered on the HTTP client.
//!
//! Each operation owns the token side effects appropriate to it: login and
//! registration persist the pair returned by the server, logout always clears
//! locally, the current-user lookup downgrades every failure to `None` so the
//! auth context treats "no user" uniformly.
//!
//! The `*_with` functions are generic over store and transport and carry the
//! real logic; the short public wrappers bind them to the browser store and
//! fetch transport.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Set};
use serde_json::{Value, json};

use crate::auth::tokens::{BrowserTokens, TokenStore};
use crate::net::http::{self, ApiError, ApiRequest, PreparedRequest, RawResponse};
use crate::net::types::{NewSeller, SessionPayload, User};
use crate::state::auth::AuthState;

/// Log in with email/password credentials.
///
/// When the response carries both tokens they are persisted before the
/// payload is handed back; the payload itself is passed through untouched.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn login(email: &str, password: &str) -> Result<SessionPayload, ApiError> {
    login_with(&BrowserTokens, &http::dispatch, email, password).await
}

/// Register a new seller account. Same token side effect as [`login`].
///
/// # Errors
///
/// See [`ApiError`].
pub async fn register(seller: &NewSeller) -> Result<SessionPayload, ApiError> {
    register_with(&BrowserTokens, &http::dispatch, seller).await
}

/// Log out server-side and clear the local session either way.
pub async fn logout() {
    logout_with(&BrowserTokens, &http::dispatch).await;
}

/// Fetch the authenticated user record, or `None` on any failure.
pub async fn current_user() -> Option<User> {
    current_user_with(&BrowserTokens, &http::dispatch).await
}

/// Explicitly rotate the token pair. `None` when no refresh token is stored
/// or the exchange fails (in which case both tokens are cleared).
pub async fn refresh_session() -> Option<String> {
    refresh_session_with(&BrowserTokens, &http::dispatch).await
}

/// Local, non-verifying session check: true iff an access token is stored.
/// Actual validity is only discovered on the next authenticated call.
pub fn is_authenticated() -> bool {
    BrowserTokens.access_token().is_some()
}

/// Request a password-reset email.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    let request = ApiRequest::post("/auth/forgot-password", json!({ "email": email }));
    http::request(request).await.map(|_| ())
}

/// Set a new password from a reset link.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    let request =
        ApiRequest::post("/auth/reset-password", json!({ "token": token, "password": password }));
    http::request(request).await.map(|_| ())
}

/// Confirm an email address from a verification link.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    http::request(ApiRequest::get(format!("/auth/verify-email/{token}"))).await.map(|_| ())
}

/// Initial session resolution, run once when the app mounts.
///
/// With no stored access token the state settles to `Anonymous` without a
/// network call; otherwise the user record is fetched and the state resolved
/// from whatever comes back.
pub fn resolve_startup(auth: RwSignal<AuthState>) {
    if is_authenticated() {
        leptos::task::spawn_local(async move {
            let user = current_user().await;
            auth.set(AuthState::resolved(user));
        });
    } else {
        auth.set(AuthState::Anonymous);
    }
}

/// Context logout: server call, local cleanup, state back to `Anonymous`.
pub fn sign_out(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        logout().await;
        auth.set(AuthState::Anonymous);
    });
}

pub(crate) async fn login_with<S, T, Fut>(
    store: &S,
    transport: &T,
    email: &str,
    password: &str,
) -> Result<SessionPayload, ApiError>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    let request = ApiRequest::post("/auth/login", json!({ "email": email, "password": password }));
    let value = http::send_with(store, transport, &request, true).await?;
    let payload = decode_session(value)?;
    persist_session(store, &payload);
    Ok(payload)
}

pub(crate) async fn register_with<S, T, Fut>(
    store: &S,
    transport: &T,
    seller: &NewSeller,
) -> Result<SessionPayload, ApiError>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    let body = serde_json::to_value(seller).map_err(|err| ApiError::Decode(err.to_string()))?;
    let request = ApiRequest::post("/auth/register", body);
    let value = http::send_with(store, transport, &request, true).await?;
    let payload = decode_session(value)?;
    persist_session(store, &payload);
    Ok(payload)
}

pub(crate) async fn logout_with<S, T, Fut>(store: &S, transport: &T)
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    let result =
        http::send_with(store, transport, &ApiRequest::post_empty("/auth/logout"), true).await;
    if let Err(err) = result {
        leptos::logging::warn!("logout request failed: {err}");
    }
    // Local state is cleared no matter how the server call went.
    store.clear();
}

pub(crate) async fn current_user_with<S, T, Fut>(store: &S, transport: &T) -> Option<User>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    match http::send_with(store, transport, &ApiRequest::get("/auth/me"), true).await {
        Ok(value) => match serde_json::from_value::<User>(value) {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("current-user payload did not decode: {err}");
                None
            }
        },
        // The error kind still reaches the log; callers only see "no user".
        Err(err) => {
            leptos::logging::warn!("current-user lookup failed: {err}");
            None
        }
    }
}

pub(crate) async fn refresh_session_with<S, T, Fut>(store: &S, transport: &T) -> Option<String>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    store.refresh_token()?;
    match http::refresh_tokens(store, transport).await {
        Ok(access) => Some(access),
        Err(err) => {
            leptos::logging::warn!("session refresh failed: {err}");
            None
        }
    }
}

fn decode_session(value: Value) -> Result<SessionPayload, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Persist the token pair when the payload carries both tokens; a payload
/// missing either token leaves the store untouched.
fn persist_session(store: &(impl TokenStore + ?Sized), payload: &SessionPayload) {
    if let (Some(access), Some(refresh)) = (&payload.access_token, &payload.refresh_token) {
        store.store_pair(access, refresh);
    }
}
