//! Oraculo feed client
//!
//! Polls the Oraculo API for detected malicious traffic and prints the
//! rendered list to stdout. Logs go to stderr.

use anyhow::Result;
use oraculo_feed::{
    render_text, run_poller, Config, FeedRenderer, HttpPackageSource, MemoryContainer,
    RefreshOutcome,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is the rendered feed)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,oraculo_feed=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let source = HttpPackageSource::from_config(&config)?;
    tracing::info!(endpoint = source.url(), "Starting Oraculo feed client");

    let container = MemoryContainer::new();
    tracing::debug!(container = container.id(), "Rendering into container");

    let renderer = FeedRenderer::new(source, container);

    match config.poll_interval {
        None => {
            if renderer.refresh().await == RefreshOutcome::Failed {
                anyhow::bail!(
                    "Failed to fetch the package feed from {}",
                    renderer.source().url()
                );
            }
            print!("{}", render_text(&renderer.snapshot().await));
        }
        Some(period) => {
            run_poller(&renderer, period, shutdown_signal(), |entries| {
                print!("{}", render_text(entries));
            })
            .await;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
