use std::path::PathBuf;

use clap::Parser;
use commands::{Command, Commands, Context};
use config::{Config, ConfigOverrides};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// Command-line client for reading challenge program accounts.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file. Defaults to `pact.toml` in the working directory.
    #[arg(long, short, env = "PACT_CONFIG")]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: ConfigOverrides,
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), &cli.overrides)?;
    tracing::debug!(cluster = %config.cluster(), "resolved config");

    let client = cli
        .command
        .is_client_required()
        .then(|| config.create_client())
        .transpose()?;

    cli.command
        .execute(Context::new(&config, client.as_ref()))
        .await
}
