//! CipherMesh - Reversible Text Transformation Engine
//!
//! CipherMesh runs text through three deterministic, keyless layers and
//! records how every character and block was transformed:
//! - Layer 1: Adaptive shift (position-dependent Caesar rotation)
//! - Layer 2: ASCII arithmetic (modular addition over printable ASCII)
//! - Layer 3: Block transpose (swap-and-reverse of 4-character blocks)
//!
//! Decryption runs the inverse layers in reverse order. This is an
//! obfuscation pipeline, not a secure cipher.
//!
//! # Example
//!
//! ```
//! use ciphermesh::{transform, Direction};
//!
//! let encrypted = transform(Direction::Encrypt, "AB").unwrap();
//! let decrypted = transform(Direction::Decrypt, &encrypted.result).unwrap();
//! assert_eq!(decrypted.result, "AB");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod layers;
pub mod pipeline;
pub mod trace;

pub use config::{CharacterPolicy, DisplayConfig, EngineConfig};
pub use error::{CipherError, Result};
pub use pipeline::{transform, CipherEngine, CipherRequest, CipherResult, Direction};
pub use trace::{
    ArithmeticStep, BlockOperation, BlockStep, LayerKind, LayerResult, LayerTrace, ShiftRule,
    ShiftStep, StepRecord,
};
