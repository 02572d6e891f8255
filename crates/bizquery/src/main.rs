//! Bizquery CLI binary.

use anyhow::Result;
use bizquery::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the bizquery CLI.
///
/// The dataset is loaded once and queried in memory, so a single-threaded
/// runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=bizquery=debug,bizquery_jsonl=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bizquery=info,bizquery_jsonl=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting bizquery CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Bizquery CLI completed successfully");
    Ok(())
}
