//! tmstats gateway
//!
//! - Stats endpoint: /stats, /exceptions, /exceptionsummary (protobuf bodies)
//! - Anything else: 400
//! - Single-threaded reactor: every handler runs to completion on one thread

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tmstats_core::error::Result;
use tmstats_gateway::{app_state::AppState, collector::InMemoryCollector, config, server::StatsInterface};

async fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let listen = cfg.stats.listen_addr()?;

    let collector = Arc::new(InMemoryCollector::new(
        cfg.collector.max_exceptions_per_instance,
    ));
    let state = AppState::new(collector);

    tracing::info!(%listen, "tmstats-gateway starting");
    let server = StatsInterface::start(listen, state).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; shutting down");
    }
    server.shutdown().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tmstats.yaml".to_string());

    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, config = %path, "tmstats-gateway failed");
            ExitCode::FAILURE
        }
    }
}
