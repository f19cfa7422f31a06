//! Client configuration.

use crate::client::Transport;
use crate::error::{Result, RoamError};
use crate::protocol::constants::DEFAULT_BASE_URL;
use crate::types::{CacheMode, RequestMode};
use std::fmt;
use std::sync::Arc;

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "ROAM_API_TOKEN";
/// Environment variable holding the graph name.
pub const ENV_GRAPH: &str = "ROAM_GRAPH";
/// Environment variable overriding the primary base URL.
pub const ENV_BASE_URL: &str = "ROAM_API_BASE_URL";

/// Configuration for a graph client.
///
/// # Examples
///
/// ```
/// use roam_backend_client::GraphConfig;
///
/// let config = GraphConfig::new("token", "my-graph");
/// assert_eq!(config.base_url, "https://api.roamresearch.com");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct GraphConfig {
    /// API token (secret)
    pub token: String,
    /// Name of the target graph
    pub graph: String,
    /// Primary base URL, used until a peer is discovered
    pub base_url: String,
    /// Transport to use; `None` selects [`ReqwestTransport`](crate::client::ReqwestTransport)
    pub transport: Option<Arc<dyn Transport>>,
    /// Cross-origin mode stamped on every request
    pub request_mode: RequestMode,
    /// Cache policy stamped on every request
    pub cache_mode: CacheMode,
}

impl GraphConfig {
    /// Configuration for `graph` authenticated with `token`, against the default backend.
    pub fn new(token: impl Into<String>, graph: impl Into<String>) -> Self {
        GraphConfig {
            token: token.into(),
            graph: graph.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: None,
            request_mode: RequestMode::default(),
            cache_mode: CacheMode::default(),
        }
    }

    /// Load token, graph and optional base URL from the environment.
    ///
    /// Reads `ROAM_API_TOKEN`, `ROAM_GRAPH` and `ROAM_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ENV_TOKEN)
            .map_err(|_| RoamError::InvalidConfig(format!("{} is not set", ENV_TOKEN)))?;
        let graph = std::env::var(ENV_GRAPH)
            .map_err(|_| RoamError::InvalidConfig(format!("{} is not set", ENV_GRAPH)))?;

        let mut config = GraphConfig::new(token, graph);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        config.validate()?;
        Ok(config)
    }

    /// Override the primary base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Use a specific transport instead of the default one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Cross-origin mode for every request (default [`RequestMode::Cors`]).
    #[must_use]
    pub fn with_request_mode(mut self, mode: RequestMode) -> Self {
        self.request_mode = mode;
        self
    }

    /// Cache policy for every request (default [`CacheMode::NoCache`]).
    #[must_use]
    pub fn with_cache_mode(mut self, cache: CacheMode) -> Self {
        self.cache_mode = cache;
        self
    }

    /// Check that token and graph are set and the base URL is absolute http(s).
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(RoamError::InvalidConfig("token must not be empty".into()));
        }
        if self.graph.trim().is_empty() {
            return Err(RoamError::InvalidConfig("graph must not be empty".into()));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            RoamError::InvalidConfig(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RoamError::InvalidConfig(format!(
                "base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("token", &"<redacted>")
            .field("graph", &self.graph)
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("request_mode", &self.request_mode)
            .field("cache_mode", &self.cache_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::new("tok", "g");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.transport.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = GraphConfig::new("tok", "g").with_base_url("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(GraphConfig::new("", "g").validate().is_err());
        assert!(GraphConfig::new("tok", " ").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = GraphConfig::new("tok", "g").with_base_url("not a url");
        assert!(matches!(config.validate(), Err(RoamError::InvalidConfig(_))));

        let config = GraphConfig::new("tok", "g").with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        // One test owns these variables so parallel tests never observe them.
        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_GRAPH);
        std::env::remove_var(ENV_BASE_URL);

        let err = GraphConfig::from_env().unwrap_err();
        assert!(matches!(err, RoamError::InvalidConfig(ref m) if m.contains(ENV_TOKEN)));

        std::env::set_var(ENV_TOKEN, "env-token");
        let err = GraphConfig::from_env().unwrap_err();
        assert!(matches!(err, RoamError::InvalidConfig(ref m) if m.contains(ENV_GRAPH)));

        std::env::set_var(ENV_GRAPH, "env-graph");
        let config = GraphConfig::from_env().unwrap();
        assert_eq!(config.token, "env-token");
        assert_eq!(config.graph, "env-graph");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        std::env::set_var(ENV_BASE_URL, "http://localhost:3000/");
        let config = GraphConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");

        std::env::set_var(ENV_BASE_URL, "not a url");
        assert!(matches!(
            GraphConfig::from_env(),
            Err(RoamError::InvalidConfig(_))
        ));

        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_GRAPH);
        std::env::remove_var(ENV_BASE_URL);
    }

    #[test]
    fn test_mode_defaults_and_overrides() {
        let config = GraphConfig::new("tok", "g");
        assert_eq!(config.request_mode, RequestMode::Cors);
        assert_eq!(config.cache_mode, CacheMode::NoCache);

        let config = config
            .with_request_mode(RequestMode::SameOrigin)
            .with_cache_mode(CacheMode::Default);
        assert_eq!(config.request_mode, RequestMode::SameOrigin);
        assert_eq!(config.cache_mode, CacheMode::Default);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GraphConfig::new("super-secret", "g");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
