//! Engine configuration
//!
//! Loaded from a JSON file. Every field is optional and falls back to its
//! default, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Default number of steps the renderer prints per layer.
pub const DEFAULT_STEP_LIMIT: usize = 50;

/// Lowest printable ASCII code point accepted by the strict policy.
const STRICT_MIN: char = ' ';

/// Highest printable ASCII code point accepted by the strict policy.
const STRICT_MAX: char = '~';

/// Which characters the engine accepts.
///
/// The chosen policy is checked once over the request text, before any
/// layer runs, so all three layers see the same domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterPolicy {
    /// Accept everything; characters a layer cannot transform pass through it.
    #[default]
    Passthrough,
    /// Accept printable ASCII only and reject anything else.
    Strict,
}

impl CharacterPolicy {
    /// Check `text` against the policy.
    ///
    /// # Errors
    /// Returns `UnsupportedCharacter` with the first offending character and
    /// its character index under the strict policy.
    pub fn check(self, text: &str) -> Result<()> {
        if self == CharacterPolicy::Passthrough {
            return Ok(());
        }

        match text
            .chars()
            .enumerate()
            .find(|(_, c)| !(STRICT_MIN..=STRICT_MAX).contains(c))
        {
            Some((index, character)) => Err(CipherError::UnsupportedCharacter { character, index }),
            None => Ok(()),
        }
    }
}

/// Settings for the trace renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum steps printed per layer before the "... and N more" notice.
    pub step_limit: usize,

    /// Whether layer-3 blocks are printed.
    pub show_blocks: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            show_blocks: true,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub character_policy: CharacterPolicy,
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CipherError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.display.step_limit == 0 {
            return Err(CipherError::InvalidConfig {
                reason: "display.step_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.character_policy, CharacterPolicy::Passthrough);
        assert_eq!(config.display.step_limit, 50);
        assert!(config.display.show_blocks);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_display_section() {
        let config =
            EngineConfig::from_json_str(r#"{"character_policy": "strict", "display": {"step_limit": 10}}"#)
                .unwrap();
        assert_eq!(config.character_policy, CharacterPolicy::Strict);
        assert_eq!(config.display.step_limit, 10);
        assert!(config.display.show_blocks);
    }

    #[test]
    fn test_zero_step_limit_rejected() {
        let err = EngineConfig::from_json_str(r#"{"display": {"step_limit": 0}}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = EngineConfig::from_json_str(r#"{"character_policy": "lenient"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display": {{"show_blocks": false}}}}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert!(!config.display.show_blocks);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_READ_ERROR");
    }

    #[test]
    fn test_strict_policy_reports_first_offender() {
        let err = CharacterPolicy::Strict.check("ok\tno").unwrap_err();
        match err {
            CipherError::UnsupportedCharacter { character, index } => {
                assert_eq!(character, '\t');
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_strict_policy_counts_characters_not_bytes() {
        let err = CharacterPolicy::Strict.check("é!ü").unwrap_err();
        assert!(matches!(
            err,
            CipherError::UnsupportedCharacter { character: 'é', index: 0 }
        ));
    }

    #[test]
    fn test_passthrough_accepts_anything() {
        assert!(CharacterPolicy::Passthrough.check("\u{0}\tü✓").is_ok());
        assert!(CharacterPolicy::Strict.check("Hello, World! ~").is_ok());
    }
}
