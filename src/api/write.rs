//! Write operations. Every mutation posts to the graph's `write` route.
//!
//! The wrappers return `Ok(true)` once the backend accepted the write; any
//! rejection has already been turned into an error by
//! [`RoamBackendClient::api`].

use super::payload::{
    CreateBlock, CreatePage, DeleteBlock, DeletePage, MoveBlock, UpdateBlock, UpdatePage,
    WriteAction,
};
use crate::client::RoamBackendClient;
use crate::error::Result;
use crate::protocol::{constants::routes, graph_path};
use http::Method;

/// Send any mutation to the `write` route.
pub async fn write(client: &RoamBackendClient, action: &WriteAction) -> Result<bool> {
    let path = graph_path(client.graph(), routes::WRITE);
    tracing::debug!(action = action.name(), graph = %client.graph(), "writing to graph");

    let response = client.api(&path, Method::POST, action).await?;
    Ok(response.ok())
}

/// Create a block at `body.location`.
pub async fn create_block(client: &RoamBackendClient, body: CreateBlock) -> Result<bool> {
    write(client, &WriteAction::CreateBlock(body)).await
}

/// Move a block to `body.location`.
pub async fn move_block(client: &RoamBackendClient, body: MoveBlock) -> Result<bool> {
    write(client, &WriteAction::MoveBlock(body)).await
}

/// Update the fields set in `body.block`.
pub async fn update_block(client: &RoamBackendClient, body: UpdateBlock) -> Result<bool> {
    write(client, &WriteAction::UpdateBlock(body)).await
}

/// Delete a block and its children.
pub async fn delete_block(client: &RoamBackendClient, body: DeleteBlock) -> Result<bool> {
    write(client, &WriteAction::DeleteBlock(body)).await
}

/// Create a page.
pub async fn create_page(client: &RoamBackendClient, body: CreatePage) -> Result<bool> {
    write(client, &WriteAction::CreatePage(body)).await
}

/// Update a page's title or view type.
pub async fn update_page(client: &RoamBackendClient, body: UpdatePage) -> Result<bool> {
    write(client, &WriteAction::UpdatePage(body)).await
}

/// Delete a page.
pub async fn delete_page(client: &RoamBackendClient, body: DeletePage) -> Result<bool> {
    write(client, &WriteAction::DeletePage(body)).await
}
