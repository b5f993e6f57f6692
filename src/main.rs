//! CipherMesh CLI
//!
//! Command-line interface for the CipherMesh transformation engine.

use clap::Parser;
use env_logger::Env;
use log::info;

use ciphermesh::cli::commands::{load_config, run_api, run_transform};
use ciphermesh::cli::{Cli, Commands};
use ciphermesh::Direction;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("CipherMesh v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Encrypt { text } => run_transform(&config, Direction::Encrypt, text, cli.json),
        Commands::Decrypt { text } => run_transform(&config, Direction::Decrypt, text, cli.json),
        Commands::Api { endpoint } => run_api(&config, endpoint.into()),
    }
}
