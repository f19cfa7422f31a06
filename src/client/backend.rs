//! The authenticated backend client.
//!
//! [`RoamBackendClient`] owns the credentials, the transport and the
//! discovered peer. Its single operation, [`api`](RoamBackendClient::api),
//! builds a request, dispatches it and classifies the response.
//!
//! # Peer discovery
//!
//! The backend may redirect a graph's requests to a `peer-N` host. When a
//! response arrives through a redirect whose final URL looks like
//! `https://peer-<digits>...:<port>/...`, the client remembers
//! `https://peer-<digits>...:<port>` and uses it as the base URL for every
//! later request. The peer is never cleared; a later matching redirect
//! replaces it.
//!
//! # Examples
//!
//! ```ignore
//! use roam_backend_client::{initialize_graph, GraphConfig};
//! use http::Method;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = initialize_graph(GraphConfig::new("token", "my-graph"));
//!     let body = serde_json::json!({ "query": "[:find ?t :where [_ :node/title ?t]]" });
//!     let response = client.api("/api/graph/my-graph/q", Method::POST, &body).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

use crate::client::utils::check_status;
use crate::client::{GraphConfig, ReqwestTransport, Transport};
use crate::error::Result;
use crate::protocol::{self, constants::DEFAULT_BASE_URL};
use crate::types::{ApiRequest, ApiResponse, CacheMode, RequestMode};
use bytes::Bytes;
use http::Method;
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Client for one graph on the Roam backend.
///
/// Cloning is cheap; clones share the transport and the discovered peer.
///
/// # Concurrency
///
/// Concurrent calls on one client are allowed. The peer is the only mutable
/// state; if two in-flight requests observe different peer redirects, the
/// last one to finish wins. Serialize calls yourself if that ordering matters.
#[derive(Clone)]
pub struct RoamBackendClient {
    token: String,
    graph: String,
    base_url: String,
    peer: Arc<RwLock<Option<String>>>,
    transport: Arc<dyn Transport>,
    mode: RequestMode,
    cache: CacheMode,
}

impl RoamBackendClient {
    /// Create a client against the default backend.
    pub fn new(
        token: impl Into<String>,
        graph: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        RoamBackendClient {
            token: token.into(),
            graph: graph.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            peer: Arc::new(RwLock::new(None)),
            transport,
            mode: RequestMode::default(),
            cache: CacheMode::default(),
        }
    }

    /// Create a client from a configuration, using [`ReqwestTransport`] when
    /// none is configured. Performs no network I/O.
    pub fn from_config(config: GraphConfig) -> Self {
        let transport = config
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));

        RoamBackendClient {
            token: config.token,
            graph: config.graph,
            base_url: config.base_url,
            peer: Arc::new(RwLock::new(None)),
            transport,
            mode: config.request_mode,
            cache: config.cache_mode,
        }
    }

    /// Name of the graph this client targets.
    #[inline]
    pub fn graph(&self) -> &str {
        &self.graph
    }

    /// The discovered peer base URL, if any.
    pub fn peer(&self) -> Option<String> {
        self.peer.read().clone()
    }

    /// Base URL the next request will use: the peer if known, else the primary.
    pub fn base_url(&self) -> String {
        self.peer().unwrap_or_else(|| self.base_url.clone())
    }

    /// Build the request for `path` without sending it.
    ///
    /// The URL is the current base URL followed by `path`; the body is
    /// `body` serialized as JSON. No validation of `path` or `body` happens
    /// here.
    pub fn build_request<B>(&self, path: &str, method: Method, body: &B) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let body = Bytes::from(serde_json::to_vec(body)?);

        Ok(ApiRequest {
            method,
            url: format!("{}{}", self.base_url(), path),
            headers: protocol::default_headers(&self.token)?,
            body,
            mode: self.mode,
            cache: self.cache,
        })
    }

    /// Send one request and classify the response.
    ///
    /// Returns the response untouched when its status is 200. Any other
    /// status becomes a [`RoamError`](crate::RoamError); transport failures
    /// are returned as the transport reported them. Nothing is retried.
    pub async fn api<B>(&self, path: &str, method: Method, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(path, method, body)?;
        tracing::debug!(method = %request.method, url = %request.url, "dispatching backend request");

        let response = self.transport.call(request).await?;

        if response.redirected {
            self.record_peer(&response.url);
        }

        tracing::debug!(status = response.status, graph = %self.graph, "backend responded");

        if let Err(e) = check_status(&response) {
            tracing::warn!(status = response.status, error = %e, "backend request failed");
            return Err(e);
        }

        Ok(response)
    }

    fn record_peer(&self, url: &str) {
        match protocol::extract_peer(url) {
            Some(peer) => {
                let previous = self.peer.write().replace(peer.clone());
                tracing::info!(
                    previous = previous.as_deref().unwrap_or(self.base_url.as_str()),
                    peer = %peer,
                    "discovered backend peer"
                );
            }
            None => {
                tracing::debug!(url = %url, "redirect target is not a peer; keeping base URL");
            }
        }
    }
}

impl fmt::Debug for RoamBackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoamBackendClient")
            .field("graph", &self.graph)
            .field("base_url", &self.base_url)
            .field("peer", &*self.peer.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::headers;

    fn client() -> RoamBackendClient {
        RoamBackendClient::new("tok", "g", Arc::new(ReqwestTransport::new()))
    }

    #[test]
    fn test_build_request() {
        let client = client();
        let req = client
            .build_request("/api/graph/g/q", Method::POST, &serde_json::json!({"query": "x"}))
            .unwrap();

        assert_eq!(req.url, "https://api.roamresearch.com/api/graph/g/q");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.mode, RequestMode::Cors);
        assert_eq!(req.cache, CacheMode::NoCache);
        assert_eq!(req.headers[headers::AUTHORIZATION], "Bearer tok");
        assert_eq!(req.headers[headers::X_AUTHORIZATION], "Bearer tok");
        assert_eq!(
            req.headers[headers::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(req.json_body().unwrap(), serde_json::json!({"query": "x"}));
    }

    #[test]
    fn test_peer_supersedes_base_url() {
        let client = client();
        client.record_peer("https://peer-3.api.roamresearch.com:3001/api/graph/g/q");
        assert_eq!(client.base_url(), "https://peer-3.api.roamresearch.com:3001");

        let req = client.build_request("/p", Method::POST, &()).unwrap();
        assert_eq!(req.url, "https://peer-3.api.roamresearch.com:3001/p");
    }

    #[test]
    fn test_non_peer_redirect_keeps_previous_peer() {
        let client = client();
        client.record_peer("https://peer-3.api.roamresearch.com:3001/api");
        client.record_peer("https://elsewhere.example.com/api");
        assert_eq!(
            client.peer().as_deref(),
            Some("https://peer-3.api.roamresearch.com:3001")
        );
    }

    #[test]
    fn test_clones_share_peer() {
        let client = client();
        let clone = client.clone();
        clone.record_peer("https://peer-9.x:1/y");
        assert_eq!(client.peer().as_deref(), Some("https://peer-9.x:1"));
    }

    #[test]
    fn test_configured_modes_reach_request() {
        let client = RoamBackendClient::from_config(
            GraphConfig::new("tok", "g")
                .with_transport(Arc::new(ReqwestTransport::new()))
                .with_request_mode(RequestMode::SameOrigin)
                .with_cache_mode(CacheMode::Default),
        );
        let req = client.build_request("/p", Method::POST, &()).unwrap();
        assert_eq!(req.mode, RequestMode::SameOrigin);
        assert_eq!(req.cache, CacheMode::Default);
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("tok\""));
        assert!(debug.contains("RoamBackendClient"));
    }
}
