//! REST API client: the single chokepoint for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views and the session context never touch the transport directly. Every
//! call goes through [`ApiClient::send`], which joins the configured base URL,
//! attaches JSON + bearer headers from the persisted session, and normalizes
//! failures into [`ApiError`]. Typed operations live in the per-resource
//! `api_*` modules and are reached through accessors such as
//! [`ApiClient::apartments`].
//!
//! ERROR HANDLING
//! ==============
//! The client never retries or recovers; callers decide what a failure means.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::{Deserialize as _, Serialize};

use super::error::ApiError;
use super::transport::{FetchTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::state::storage::{KeyValueStore, LocalStorage, SessionStore};

/// Typed HTTP client bound to one backend and one session store.
#[derive(Clone, Debug)]
pub struct ApiClient<T = FetchTransport, B = LocalStorage> {
    config: ApiConfig,
    store: SessionStore<B>,
    transport: T,
}

impl ApiClient {
    /// Client for the browser build: build-time base URL, `localStorage`, `fetch`.
    pub fn browser() -> Self {
        Self::new(ApiConfig::from_build_env(), SessionStore::new(LocalStorage), FetchTransport)
    }
}

impl<T: Transport, B: KeyValueStore> ApiClient<T, B> {
    pub fn new(config: ApiConfig, store: SessionStore<B>, transport: T) -> Self {
        Self { config, store, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The persisted session this client authorizes with.
    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the outgoing request for `path`, reading the token at call time.
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.store.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.config.url(path), headers, body }
    }

    /// Send a request and decode the response as `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable success body.
    pub async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let request = self.build_request(method, path, body);
        let resp = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{method} {path} failed before response: {e}");
        })?;
        log::debug!("{method} {path} -> {}", resp.status);
        decode_response(&resp).inspect_err(|e| log::warn!("{method} {path} failed: {e}"))
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::Get, path, None).await
    }

    pub(crate) async fn post<R: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<R, ApiError> {
        self.send(Method::Post, path, Some(encode_body(body)?)).await
    }

    pub(crate) async fn put<R: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<R, ApiError> {
        self.send(Method::Put, path, Some(encode_body(body)?)).await
    }

    pub(crate) async fn patch<R: DeserializeOwned>(&self, path: &str, body: Option<&serde_json::Value>) -> Result<R, ApiError> {
        let body = body.map(encode_body).transpose()?;
        self.send(Method::Patch, path, body).await
    }

    /// Deletes answer with `204` or an acknowledgement body; the body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: serde::de::IgnoredAny = self.send(Method::Delete, path, None).await?;
        Ok(())
    }
}

/// Turn a raw response into the caller's type.
///
/// `204 No Content` decodes from JSON `null` without reading the body, which
/// suits `()` and `Option<_>` results.
///
/// # Errors
///
/// Returns [`ApiError`] for non-2xx statuses (message extracted from the
/// body) and for success bodies that do not match `R`.
pub fn decode_response<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    if !resp.is_success() {
        return Err(ApiError::from_response(resp.status, &resp.status_text, &resp.body));
    }
    if resp.status == 204 {
        return R::deserialize(serde_json::Value::Null).map_err(|e| invalid_body(resp.status, &e));
    }
    serde_json::from_str(&resp.body).map_err(|e| invalid_body(resp.status, &e))
}

fn invalid_body(status: u16, err: &serde_json::Error) -> ApiError {
    ApiError::http(status, format!("invalid response body: {err}"))
}

fn encode_body(body: &impl Serialize) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::transport(format!("failed to encode request: {e}")))
}

/// Query-string builder that drops absent and empty values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` unless the value is absent or blank.
    #[must_use]
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_owned()));
        }
        self
    }

    /// Add `key=value` for any displayable value that is present.
    #[must_use]
    pub fn value(self, key: &'static str, value: Option<impl Display>) -> Self {
        let rendered = value.map(|v| v.to_string());
        self.text(key, rendered.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded `k=v&k=v` form without a leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query to `path`, omitting `?` when nothing survived.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() { path.to_owned() } else { format!("{path}?{}", self.encode()) }
    }
}

/// Percent-encode one path segment (ids come from route params).
pub(crate) fn segment(raw: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(raw)
}
