//! lft-dash: a small web dashboard for the LFT manufacturing operations database.
//!
//! Reads the `raw_materials` and `qc_test` tables from a local SQLite file and
//! serves a single page with a line chart.

mod app;
mod cli;
mod data;
mod error;
mod server;
mod ui;

use anyhow::Result;
use cli::{AppConfig, Cli};
use tracing_subscriber::EnvFilter;

/// Debug-level diagnostics unless `RUST_LOG` says otherwise
const DEFAULT_LOG_FILTER: &str = "lft_dash=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_cli(cli);
    app::run(config).await?;

    Ok(())
}
