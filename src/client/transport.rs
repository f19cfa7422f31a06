//! The transport capability and its default reqwest implementation.

use crate::error::Result;
use crate::protocol::constants::headers;
use crate::types::{ApiRequest, ApiResponse, CacheMode};
use async_trait::async_trait;
use http::HeaderValue;
use std::collections::BTreeMap;

/// Performs exactly one network exchange.
///
/// Timeouts, connection reuse and redirect following are the transport's
/// business; the backend client only builds requests and classifies
/// responses. Implementations must report `redirected` and the final `url`
/// so peer discovery can work.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the complete response.
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Default transport backed by [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Self {
        let client = reqwest::Client::builder().build().unwrap_or_default();
        ReqwestTransport { client }
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut header_map = request.headers;
        if request.cache == CacheMode::NoCache {
            header_map.insert(headers::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        }

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(header_map)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let url = response.url().to_string();
        let redirected = match reqwest::Url::parse(&request.url) {
            Ok(original) => &original != response.url(),
            Err(_) => url != request.url,
        };

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            redirected,
            url,
            headers,
            body,
        })
    }
}
