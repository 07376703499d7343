//! Stream Links CLI
//!
//! Command-line interface for minting and verifying stream identifier tokens.

use anyhow::Result;
use clap::Parser;

use stream_links::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    // Execute the command
    match cli.command {
        Commands::Keygen { bytes, save } => commands::keygen::execute(bytes, save, config, cli.json),
        Commands::Encode { target } => commands::encode::execute(target, config, cli.json),
        Commands::Decode { shape, token } => {
            commands::decode::execute(shape.into(), &token, config, cli.json)
        },
        Commands::Config {
            key,
            value,
            list,
            unset,
        } => commands::config::execute(key, value, list, unset, config, cli.json),
    }
}
