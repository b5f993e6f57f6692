//! Cipher requests

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Which way the pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, immutable transformation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    direction: Direction,
    text: String,
}

impl CipherRequest {
    /// Build a request, rejecting empty input
    ///
    /// Plaintext that is empty or only whitespace is rejected. Ciphertext is
    /// only rejected when empty: whitespace-only ciphertext is a legitimate
    /// encoder output (`"|"` encrypts to `" "`).
    ///
    /// # Errors
    /// Returns `EmptyInput` when the text is rejected
    pub fn new(direction: Direction, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let rejected = match direction {
            Direction::Encrypt => text.trim().is_empty(),
            Direction::Decrypt => text.is_empty(),
        };
        if rejected {
            return Err(CipherError::EmptyInput);
        }

        Ok(Self { direction, text })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Input length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; empty requests cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected_both_ways() {
        assert!(matches!(
            CipherRequest::new(Direction::Encrypt, ""),
            Err(CipherError::EmptyInput)
        ));
        assert!(matches!(
            CipherRequest::new(Direction::Decrypt, ""),
            Err(CipherError::EmptyInput)
        ));
    }

    #[test]
    fn test_whitespace_plaintext_rejected() {
        assert!(matches!(
            CipherRequest::new(Direction::Encrypt, " \t\n"),
            Err(CipherError::EmptyInput)
        ));
    }

    #[test]
    fn test_whitespace_ciphertext_accepted() {
        let request = CipherRequest::new(Direction::Decrypt, "  ").unwrap();
        assert_eq!(request.len(), 2);
    }

    #[test]
    fn test_length_counts_characters() {
        let request = CipherRequest::new(Direction::Encrypt, "héé").unwrap();
        assert_eq!(request.len(), 3);
        assert_eq!(request.direction(), Direction::Encrypt);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Encrypt.to_string(), "encrypt");
        assert_eq!(
            serde_json::to_value(Direction::Decrypt).unwrap(),
            serde_json::json!("decrypt")
        );
    }
}
