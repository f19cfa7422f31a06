//! Backend client, transport and configuration.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── backend   - RoamBackendClient: request building and response classification
//! ├── config    - GraphConfig
//! ├── transport - Transport capability and the reqwest default
//! └── utils     - Status classification helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RoamBackendClient`] | Authenticated client for one graph |
//! | [`GraphConfig`] | Token, graph, base URL and optional transport |
//! | [`Transport`] | One request in, one response out |
//! | [`ReqwestTransport`] | Default [`Transport`] over reqwest |
//!
//! # Examples
//!
//! ```
//! use roam_backend_client::client::{GraphConfig, RoamBackendClient};
//!
//! let client = RoamBackendClient::from_config(
//!     GraphConfig::new("token", "my-graph").with_base_url("http://localhost:3000"),
//! );
//! assert_eq!(client.graph(), "my-graph");
//! assert_eq!(client.base_url(), "http://localhost:3000");
//! assert!(client.peer().is_none());
//! ```

mod backend;
mod config;
mod transport;
mod utils;

pub use backend::RoamBackendClient;
pub use config::{GraphConfig, ENV_BASE_URL, ENV_GRAPH, ENV_TOKEN};
pub use transport::{ReqwestTransport, Transport};
pub use utils::*;
