//! Append a block to a page, then read the page back
//!
//! Run with: cargo run --example write_blocks -- <page-uid> "<text>"

use anyhow::{bail, Context};
use roam_backend_client::api::{Block, BlockLocation, CreateBlock};
use roam_backend_client::{create_block, initialize_graph, pull, GraphConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut argv = std::env::args().skip(1);
    let (Some(page_uid), Some(text)) = (argv.next(), argv.next()) else {
        bail!("usage: write_blocks <page-uid> <text>");
    };

    let graph = initialize_graph(GraphConfig::from_env()?);

    let created = create_block(
        &graph,
        CreateBlock {
            location: BlockLocation::last(page_uid.as_str()),
            block: Block::new(text),
        },
    )
    .await
    .context("creating block")?;
    println!("Created: {}", created);

    let page = pull(
        &graph,
        "[:block/uid :node/title {:block/children [:block/uid :block/string]}]",
        &format!("[:block/uid \"{}\"]", page_uid),
    )
    .await
    .context("pulling page")?;

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
