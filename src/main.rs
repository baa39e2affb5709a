//! Binary entrypoint.
//!
//! Layers:
//! - domain: graph storage + vertex validation
//! - usecase: DFS components, orchestration + progress events
//! - infrastructure: edge-list reader, NDJSON printer
//! - interface: CLI wiring

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results and NDJSON events.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    graph_dfs_paths::interface::cli::run().await
}
