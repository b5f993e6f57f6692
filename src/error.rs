//! Error handling for CipherMesh
//!
//! Every error is terminal for the request that raised it. Errors carry a
//! stable code for API envelopes and a friendly message for display.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CipherMesh operations
pub type Result<T> = std::result::Result<T, CipherError>;

/// Main error type for CipherMesh operations
#[derive(Error, Debug)]
pub enum CipherError {
    // Request Errors
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Unsupported character {character:?} at index {index}")]
    UnsupportedCharacter { character: char, index: usize },

    // Layer Errors
    #[error("Block partition mismatch: length {length} does not split into blocks of {block_size}")]
    BlockLengthMismatch { length: usize, block_size: usize },

    // Configuration Errors
    #[error("Failed to read config file: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CipherError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            CipherError::EmptyInput => "EMPTY_INPUT",
            CipherError::UnsupportedCharacter { .. } => "UNSUPPORTED_CHARACTER",
            CipherError::BlockLengthMismatch { .. } => "BLOCK_LENGTH_MISMATCH",
            CipherError::ConfigRead { .. } => "CONFIG_READ_ERROR",
            CipherError::InvalidConfig { .. } => "INVALID_CONFIG",
            CipherError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can fix this error by changing the request
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CipherError::EmptyInput
                | CipherError::UnsupportedCharacter { .. }
                | CipherError::BlockLengthMismatch { .. }
        )
    }

    /// Get a user-friendly message for this error
    pub fn friendly_message(&self) -> String {
        match self {
            CipherError::EmptyInput => "Please enter some text to transform.".to_string(),
            CipherError::UnsupportedCharacter { character, index } => format!(
                "The character {:?} at position {} is not supported. Only printable ASCII is allowed in strict mode.",
                character, index
            ),
            CipherError::BlockLengthMismatch { length, .. } => format!(
                "This ciphertext ({} characters) could not have been produced by the encoder.",
                length
            ),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CipherError::EmptyInput.error_code(), "EMPTY_INPUT");

        let err = CipherError::UnsupportedCharacter {
            character: 'é',
            index: 3,
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_CHARACTER");

        let err = CipherError::BlockLengthMismatch {
            length: 7,
            block_size: 4,
        };
        assert_eq!(err.error_code(), "BLOCK_LENGTH_MISMATCH");
    }

    #[test]
    fn test_display_unsupported_character() {
        let err = CipherError::UnsupportedCharacter {
            character: '\u{7f}',
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported character '\\u{7f}' at index 2"
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(CipherError::EmptyInput.is_input_error());
        assert!(!CipherError::InvalidConfig {
            reason: "bad".to_string()
        }
        .is_input_error());
    }

    #[test]
    fn test_friendly_message_mentions_position() {
        let err = CipherError::UnsupportedCharacter {
            character: 'ß',
            index: 5,
        };
        assert!(err.friendly_message().contains("position 5"));
    }
}
