use anyhow::{Context, Result};
use clap::Parser;
use hangterm::cli::{run_cli, Cli, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from(&cli);

    // Logs go to a file so they never interleave with the game text
    let log_file = std::fs::File::create(&settings.log_file)
        .with_context(|| format!("failed to create log file {}", settings.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting hangterm");
    run_cli(cli)
}
