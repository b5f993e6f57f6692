//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io::{self, Read};

use anyhow::{bail, Context};
use log::{info, warn};

use super::render::render_result;
use super::Cli;
use crate::api;
use crate::config::{CharacterPolicy, EngineConfig};
use crate::pipeline::{CipherEngine, Direction};

/// Build the effective configuration: file first, then flag overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            EngineConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if cli.strict {
        config.character_policy = CharacterPolicy::Strict;
    }
    if let Some(limit) = cli.step_limit {
        config.display.step_limit = limit;
    }
    config.validate()?;

    Ok(config)
}

/// Encrypt or decrypt text and print the result.
pub fn run_transform(
    config: &EngineConfig,
    direction: Direction,
    text: Option<String>,
    as_json: bool,
) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin_text()?,
    };

    info!("Running {} on {} characters", direction, text.chars().count());

    let engine = CipherEngine::with_config(config);
    let result = match engine.transform(direction, &text) {
        Ok(result) => result,
        Err(e) => {
            warn!("{} failed: {}", direction, e);
            bail!("{} ({})", e.friendly_message(), e.error_code());
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result, &config.display));
        println!("Digest: {}", result.digest()?);
    }

    Ok(())
}

/// Read a JSON request body from stdin and print the response envelope.
pub fn run_api(config: &EngineConfig, direction: Direction) -> anyhow::Result<()> {
    let mut body = String::new();
    io::stdin()
        .read_to_string(&mut body)
        .context("failed to read request body from stdin")?;

    let engine = CipherEngine::with_config(config);
    let response = api::handle(&engine, direction, &body);

    info!("API {} responded with status {}", direction, response.status);
    println!("{}", response.to_json_string());

    if !response.is_success() {
        bail!("request failed with status {}", response.status);
    }
    Ok(())
}

/// Read text from stdin, dropping one trailing line ending.
fn read_stdin_text() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(strip_line_ending(text))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_line_ending("  ".to_string()), "  ");
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display": {{"step_limit": 20}}}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "ciphermesh",
            "--config",
            path.as_str(),
            "--strict",
            "encrypt",
            "x",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.character_policy, CharacterPolicy::Strict);
        assert_eq!(config.display.step_limit, 20);
    }

    #[test]
    fn test_zero_step_limit_flag_rejected() {
        let cli = Cli::try_parse_from(["ciphermesh", "--step-limit", "0", "encrypt", "x"]).unwrap();
        assert!(load_config(&cli).is_err());
    }
}
