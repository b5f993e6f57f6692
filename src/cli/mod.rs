//! CLI Module
//!
//! Command-line interface for the CipherMesh engine.

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::Direction;

/// CipherMesh - three-layer reversible text cipher with execution traces
#[derive(Parser, Debug)]
#[command(name = "ciphermesh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the full result as JSON instead of a rendered trace
    #[arg(long, global = true)]
    pub json: bool,

    /// Reject anything outside printable ASCII
    #[arg(long, global = true)]
    pub strict: bool,

    /// Steps shown per layer before truncating
    #[arg(long, global = true)]
    pub step_limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt plaintext
    #[command(name = "encrypt")]
    Encrypt {
        /// Text to encrypt (read from stdin when omitted)
        text: Option<String>,
    },

    /// Decrypt ciphertext
    #[command(name = "decrypt")]
    Decrypt {
        /// Text to decrypt (read from stdin when omitted)
        text: Option<String>,
    },

    /// Answer a JSON API request read from stdin
    #[command(name = "api")]
    Api {
        /// Endpoint to emulate
        #[arg(value_enum)]
        endpoint: Endpoint,
    },
}

/// API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    Encrypt,
    Decrypt,
}

impl From<Endpoint> for Direction {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Encrypt => Direction::Encrypt,
            Endpoint::Decrypt => Direction::Decrypt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encrypt_with_flags() {
        let cli = Cli::try_parse_from(["ciphermesh", "encrypt", "hello", "--json", "--strict"]).unwrap();
        assert!(cli.json);
        assert!(cli.strict);
        match cli.command {
            Commands::Encrypt { text } => assert_eq!(text.as_deref(), Some("hello")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_api_endpoint() {
        let cli = Cli::try_parse_from(["ciphermesh", "api", "decrypt"]).unwrap();
        match cli.command {
            Commands::Api { endpoint } => assert_eq!(Direction::from(endpoint), Direction::Decrypt),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_step_limit_flag() {
        let cli = Cli::try_parse_from(["ciphermesh", "--step-limit", "5", "decrypt"]).unwrap();
        assert_eq!(cli.step_limit, Some(5));
    }
}
