//! Pipeline Module
//!
//! Request and result types plus the orchestrator that runs the layers:
//! - Encrypt: Layer 1 → Layer 2 → Layer 3
//! - Decrypt: Layer 3⁻¹ → Layer 2⁻¹ → Layer 1⁻¹

mod orchestrator;
mod request;
mod result;

pub use orchestrator::CipherEngine;
pub use request::{CipherRequest, Direction};
pub use result::CipherResult;

use crate::error::Result;

/// Transform `text` with a default-configured engine.
///
/// # Errors
/// `EmptyInput` for empty input (or all-whitespace plaintext), and
/// `BlockLengthMismatch` if the ciphertext partition cannot be rebuilt.
pub fn transform(direction: Direction, text: &str) -> Result<CipherResult> {
    CipherEngine::new().transform(direction, text)
}
