//! Graph operations and the client factory.
//!
//! | Function | Route | Returns |
//! |----------|-------|---------|
//! | [`q`] | `q` | `result` of the query |
//! | [`pull`] | `pull` | `result` of the pull |
//! | [`create_block`], [`move_block`], [`update_block`], [`delete_block`] | `write` | `true` on success |
//! | [`create_page`], [`update_page`], [`delete_page`] | `write` | `true` on success |
//!
//! # Examples
//!
//! ```ignore
//! use roam_backend_client::api::{create_block, initialize_graph, q, Block, BlockLocation, CreateBlock};
//! use roam_backend_client::GraphConfig;
//!
//! let graph = initialize_graph(GraphConfig::new(token, "Clojuredart"));
//!
//! create_block(&graph, CreateBlock {
//!     location: BlockLocation::last("01-02-2023"),
//!     block: Block::new("coucou"),
//! })
//! .await?;
//!
//! let hits = q(&graph, query, Some(vec!["apple".into()])).await?;
//! ```

mod payload;
mod read;
mod write;

pub use payload::*;
pub use read::{pull, pull_as, q, q_as};
pub use write::{
    create_block, create_page, delete_block, delete_page, move_block, update_block, update_page,
    write,
};

use crate::client::{GraphConfig, RoamBackendClient};
use crate::error::Result;

/// Build a client for `config`, using the reqwest transport if none is set.
///
/// No network traffic happens here.
pub fn initialize_graph(config: GraphConfig) -> RoamBackendClient {
    tracing::debug!(graph = %config.graph, base_url = %config.base_url, "initializing graph client");
    RoamBackendClient::from_config(config)
}

/// [`initialize_graph`] after [`GraphConfig::validate`].
pub fn try_initialize_graph(config: GraphConfig) -> Result<RoamBackendClient> {
    config.validate()?;
    Ok(initialize_graph(config))
}
