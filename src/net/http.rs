//! HTTP client for the MystigTravel REST API.
//!
//! Every outbound call funnels through [`send_with`]: it attaches the bearer
//! access token, issues the request, and on a 401/403 performs one silent
//! refresh-and-retry cycle before surfacing an error. The retry budget is an
//! explicit parameter, so a call is attempted at most twice no matter how the
//! server answers.
//!
//! The driver is generic over its transport so the whole token protocol runs
//! under native tests; the browser build plugs in a `gloo-net` fetch.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use serde_json::Value;

use crate::auth::tokens::{BrowserTokens, TokenStore};
use crate::net::types::SessionPayload;

/// Default backend address, overridable at build time via `MYSTIG_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Resolve the API base URL.
pub fn base_url() -> &'static str {
    option_env!("MYSTIG_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// HTTP verbs used by the REST surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A REST call before URL resolution and token attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self { method: Method::Get, endpoint: endpoint.into(), body: None }
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, endpoint: endpoint.into(), body: Some(body) }
    }

    /// POST with an empty body (e.g. `/auth/logout`).
    pub fn post_empty(endpoint: impl Into<String>) -> Self {
        Self { method: Method::Post, endpoint: endpoint.into(), body: None }
    }

    pub fn put(endpoint: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, endpoint: endpoint.into(), body: Some(body) }
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self { method: Method::Delete, endpoint: endpoint.into(), body: None }
    }
}

/// What a transport actually sends: resolved URL, optional bearer token and
/// serialized JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

/// Raw transport result before JSON parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure taxonomy for API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The refresh protocol could not recover the session; both tokens have
    /// been cleared.
    #[error("session expired, please login again")]
    SessionExpired,
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never completed (connectivity, CORS, non-browser build).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Issue `request` against the remote API, driving the refresh-and-retry
/// protocol over `store`.
///
/// `allow_retry` is the retry budget: when true, a single 401/403 with a
/// stored refresh token triggers one token refresh and one resend of the
/// original request. The budget is spent before the refresh outcome is known,
/// so no sequence of responses produces a third attempt.
///
/// # Errors
///
/// See [`ApiError`]; transport failures are logged here and propagated
/// without retry.
pub async fn send_with<S, T, Fut>(
    store: &S,
    transport: &T,
    request: &ApiRequest,
    mut allow_retry: bool,
) -> Result<Value, ApiError>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    loop {
        let prepared = PreparedRequest {
            method: request.method,
            url: format!("{}{}", base_url(), request.endpoint),
            bearer: store.access_token(),
            body: request.body.as_ref().map(ToString::to_string),
        };

        let response = match transport(prepared).await {
            Ok(response) => response,
            Err(err) => {
                leptos::logging::warn!("API error on {}: {err}", request.endpoint);
                return Err(err);
            }
        };

        if matches!(response.status, 401 | 403)
            && allow_retry
            && store.refresh_token().is_some()
        {
            allow_retry = false;
            refresh_tokens(store, transport).await?;
            continue;
        }

        if !response.is_ok() {
            return Err(ApiError::Server {
                status: response.status,
                message: server_message(&response.body),
            });
        }

        return parse_body(&response.body);
    }
}

/// Exchange the stored refresh token for a new token pair.
///
/// On success the new pair is persisted and the new access token returned.
/// A server rejection (or a payload missing either token) clears both tokens
/// and reports the session expired; transport failures propagate unchanged.
///
/// # Errors
///
/// [`ApiError::SessionExpired`] when no refresh token is stored or the server
/// refuses the exchange.
pub async fn refresh_tokens<S, T, Fut>(store: &S, transport: &T) -> Result<String, ApiError>
where
    S: TokenStore + ?Sized,
    T: Fn(PreparedRequest) -> Fut,
    Fut: Future<Output = Result<RawResponse, ApiError>>,
{
    let Some(refresh) = store.refresh_token() else {
        return Err(ApiError::SessionExpired);
    };

    // The refresh call itself is unauthenticated: no bearer header.
    let prepared = PreparedRequest {
        method: Method::Post,
        url: format!("{}/auth/refresh-token", base_url()),
        bearer: None,
        body: Some(serde_json::json!({ "refreshToken": refresh }).to_string()),
    };

    let response = transport(prepared).await?;
    if !response.is_ok() {
        leptos::logging::warn!("token refresh rejected with status {}", response.status);
        store.clear();
        return Err(ApiError::SessionExpired);
    }

    match serde_json::from_str::<SessionPayload>(&response.body) {
        Ok(SessionPayload { access_token: Some(access), refresh_token: Some(refresh), .. }) => {
            store.store_pair(&access, &refresh);
            Ok(access)
        }
        _ => {
            leptos::logging::warn!("token refresh returned an incomplete payload");
            store.clear();
            Err(ApiError::SessionExpired)
        }
    }
}

/// Issue a REST call with the browser token store and fetch transport.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn request(api_request: ApiRequest) -> Result<Value, ApiError> {
    send_with(&BrowserTokens, &dispatch, &api_request, true).await
}

/// Browser transport. Outside a `hydrate` build this fails with a
/// network-class error, matching the SSR stubs elsewhere in the crate.
pub(crate) async fn dispatch(request: PreparedRequest) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_browser(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_browser(request: PreparedRequest) -> Result<RawResponse, ApiError> {
    let method = match request.method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    };

    let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
        .method(method)
        .header("Content-Type", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let sent = match request.body {
        Some(body) => {
            builder
                .body(body)
                .map_err(|err| ApiError::Network(err.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body })
}

/// Pull the server-supplied `message` out of an error body, falling back to a
/// generic failure message.
fn server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_owned();
        }
    }
    "API request failed".to_owned()
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}
