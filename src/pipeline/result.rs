//! Cipher results

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::request::Direction;
use crate::error::Result;
use crate::trace::{LayerKind, LayerResult};

/// The outcome of one transformation
///
/// Layers are listed in execution order: `[1, 2, 3]` for encryption and
/// `[3, 2, 1]` for decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    pub success: bool,
    pub direction: Direction,
    /// Text the pipeline was given
    pub input: String,
    /// Ciphertext when encrypting, recovered plaintext when decrypting
    pub result: String,
    pub layers: Vec<LayerResult>,
}

impl CipherResult {
    /// Find the result of a given layer
    pub fn layer(&self, kind: LayerKind) -> Option<&LayerResult> {
        self.layers.iter().find(|l| l.layer == kind)
    }

    /// Input length in characters
    pub fn length(&self) -> usize {
        self.input.chars().count()
    }

    /// Lowercase hex SHA-256 of the canonical JSON form
    ///
    /// Identical requests always produce identical digests.
    pub fn digest(&self) -> Result<String> {
        let canonical = serde_json::to_vec(self)?;
        Ok(format!("{:x}", Sha256::digest(&canonical)))
    }
}
