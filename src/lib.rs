#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Roam backend client
//!
//! Typed access to a Roam Research graph over the backend HTTP API.
//!
//! ## Overview
//!
//! ```text
//! caller → api::{q, pull, create_block, ...}
//!        → RoamBackendClient::api      (build request, classify response)
//!        → Transport::call             (one network exchange)
//! ```
//!
//! - **Reads**: [`q`] runs a datalog query, [`pull`] fetches an entity by selector.
//! - **Writes**: block and page mutations, all sent to the graph's `write` route
//!   with an `action` discriminator.
//! - **Peers**: the backend may redirect a graph to a `peer-N` host; the client
//!   remembers it and sends later requests there directly.
//! - **Errors**: status codes map to [`RoamError`]; nothing is retried.
//!
//! ## Usage
//!
//! ```ignore
//! use roam_backend_client::{initialize_graph, pull, GraphConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = initialize_graph(GraphConfig::from_env()?);
//!     let page = pull(
//!         &graph,
//!         "[:block/uid :node/title {:block/children [:block/string]}]",
//!         "[:block/uid \"08-30-2022\"]",
//!     )
//!     .await?;
//!     println!("{page:#}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - Backend client, configuration and transport
//! - **[api]** - Query, pull and write operations plus the factory
//! - **[types]** - Request/response descriptors
//! - **[error]** - Error types and result handling
//! - **[protocol]** - Routes, header names and peer extraction

pub mod api;
pub mod client;
pub mod error;
pub mod protocol;
pub mod types;

pub use api::{
    create_block, create_page, delete_block, delete_page, initialize_graph, move_block, pull,
    q, try_initialize_graph, update_block, update_page, WriteAction,
};
pub use client::{GraphConfig, ReqwestTransport, RoamBackendClient, Transport};
pub use error::{Result, RoamError};
pub use types::{ApiRequest, ApiResponse};
