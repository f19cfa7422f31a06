//! Request and response descriptors exchanged with a [`Transport`].
//!
//! These are plain data: building them never touches the network, and any
//! [`Transport`] implementation (reqwest, a test double, something else) only
//! has to turn an [`ApiRequest`] into an [`ApiResponse`].
//!
//! [`Transport`]: crate::client::Transport

use crate::error::Result;
use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Cross-origin mode requested for an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Cross-origin requests allowed
    #[default]
    Cors,
    /// Same-origin only
    SameOrigin,
}

/// Caching policy requested for an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Always revalidate with the backend
    #[default]
    NoCache,
    /// Let the transport decide
    Default,
}

/// A fully built backend request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method (POST for every current operation)
    pub method: Method,
    /// Absolute URL: base URL followed by the route path
    pub url: String,
    /// Request headers, authorization included
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Bytes,
    /// Cross-origin mode
    pub mode: RequestMode,
    /// Cache policy
    pub cache: CacheMode,
}

impl ApiRequest {
    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the request body as JSON.
    pub fn json_body(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// A completed backend exchange, not yet classified or decoded.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase for the status
    pub status_text: String,
    /// Whether redirects were followed to reach `url`
    pub redirected: bool,
    /// Final URL after any redirects
    pub url: String,
    /// Response headers (keys lowercased)
    pub headers: BTreeMap<String, String>,
    /// Raw response body
    pub body: Bytes,
}

impl ApiResponse {
    /// Create a response with the given status and body and no redirect.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        ApiResponse {
            status,
            status_text,
            redirected: false,
            url: String::new(),
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Mark this response as reached through a redirect ending at `url`.
    #[must_use]
    pub fn redirected_to(mut self, url: impl Into<String>) -> Self {
        self.redirected = true;
        self.url = url.into();
        self
    }

    /// Override the reason phrase.
    #[must_use]
    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = text.into();
        self
    }

    /// True for any 2xx status.
    #[inline]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as lossy UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
