//! Run a datalog query against a graph
//!
//! Reads ROAM_API_TOKEN and ROAM_GRAPH from the environment.
//!
//! Run with: cargo run --example query -- "<query>" [args...]

use anyhow::Context;
use roam_backend_client::{initialize_graph, q, GraphConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut argv = std::env::args().skip(1);
    let query = argv
        .next()
        .unwrap_or_else(|| "[:find ?title :where [_ :node/title ?title]]".to_string());
    let args: Vec<String> = argv.collect();

    let config = GraphConfig::from_env().context("loading graph configuration")?;
    println!("Querying graph {}", config.graph);

    let graph = initialize_graph(config);
    let result = q(&graph, &query, (!args.is_empty()).then_some(args))
        .await
        .context("running query")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if let Some(peer) = graph.peer() {
        println!("(served by {})", peer);
    }

    Ok(())
}
