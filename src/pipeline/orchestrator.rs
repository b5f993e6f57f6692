//! Pipeline orchestration
//!
//! The only place that knows about direction. Layers run in chain order for
//! encryption and in reverse chain order for decryption. A failing layer
//! aborts the run and everything produced so far is dropped.

use log::{debug, info};

use super::request::{CipherRequest, Direction};
use super::result::CipherResult;
use crate::config::{CharacterPolicy, EngineConfig};
use crate::error::Result;
use crate::layers::{default_layers, Layer};
use crate::trace::{LayerKind, LayerResult};

/// Three-layer cipher engine
///
/// Holds no per-request state; one engine can serve any number of requests,
/// from any number of threads.
pub struct CipherEngine {
    layers: Vec<Box<dyn Layer>>,
    policy: CharacterPolicy,
}

impl CipherEngine {
    /// Create an engine with the passthrough character policy
    pub fn new() -> Self {
        Self::with_policy(CharacterPolicy::default())
    }

    /// Create an engine with an explicit character policy
    pub fn with_policy(policy: CharacterPolicy) -> Self {
        Self {
            layers: default_layers(),
            policy,
        }
    }

    /// Create an engine from a loaded configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_policy(config.character_policy)
    }

    /// Get the active character policy
    pub fn policy(&self) -> CharacterPolicy {
        self.policy
    }

    /// Layer identities in encryption order
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|l| l.kind()).collect()
    }

    /// Encrypt plaintext
    pub fn encrypt(&self, plaintext: &str) -> Result<CipherResult> {
        self.transform(Direction::Encrypt, plaintext)
    }

    /// Decrypt ciphertext
    pub fn decrypt(&self, ciphertext: &str) -> Result<CipherResult> {
        self.transform(Direction::Decrypt, ciphertext)
    }

    /// Validate `text` into a request and run it
    pub fn transform(&self, direction: Direction, text: &str) -> Result<CipherResult> {
        let request = CipherRequest::new(direction, text)?;
        self.run(&request)
    }

    /// Run a validated request through every layer
    ///
    /// # Errors
    /// `UnsupportedCharacter` under the strict policy, or any layer error.
    /// No partial result is returned.
    pub fn run(&self, request: &CipherRequest) -> Result<CipherResult> {
        let direction = request.direction();
        self.policy.check(request.text())?;

        info!(
            "[PIPELINE] {} {} chars ({:?} policy)",
            direction,
            request.len(),
            self.policy
        );

        let ordered: Vec<&dyn Layer> = match direction {
            Direction::Encrypt => self.layers.iter().map(|l| l.as_ref()).collect(),
            Direction::Decrypt => self.layers.iter().rev().map(|l| l.as_ref()).collect(),
        };

        let mut layers = Vec::with_capacity(ordered.len());
        let mut current = request.text().to_string();

        for layer in ordered {
            let produced = match direction {
                Direction::Encrypt => layer.encode(&current)?,
                Direction::Decrypt => layer.decode(&current)?,
            };

            debug!(
                "[PIPELINE] {} produced {} trace entries",
                layer_name(layer.kind(), direction),
                produced.trace.len()
            );

            let input = std::mem::replace(&mut current, produced.output.clone());
            layers.push(LayerResult {
                layer: layer.kind(),
                name: layer_name(layer.kind(), direction),
                input,
                output: produced.output,
                formula: produced.formula,
                trace: produced.trace,
            });
        }

        Ok(CipherResult {
            success: true,
            direction,
            input: request.text().to_string(),
            result: current,
            layers,
        })
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Display name of a layer for the given direction
fn layer_name(kind: LayerKind, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => format!("Layer {}: {}", kind.number(), kind.title()),
        Direction::Decrypt => format!("Reversing Layer {}: {}", kind.number(), kind.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encrypt_trace_order() {
        let result = CipherEngine::new().encrypt("Hello").unwrap();
        let kinds: Vec<LayerKind> = result.layers.iter().map(|l| l.layer).collect();
        assert_eq!(
            kinds,
            vec![
                LayerKind::AdaptiveShift,
                LayerKind::AsciiArithmetic,
                LayerKind::BlockTranspose
            ]
        );
        assert_eq!(result.layers[0].name, "Layer 1: Adaptive Shift");
    }

    #[test]
    fn test_decrypt_trace_order() {
        let engine = CipherEngine::new();
        let encrypted = engine.encrypt("Hello").unwrap();
        let decrypted = engine.decrypt(&encrypted.result).unwrap();

        let kinds: Vec<LayerKind> = decrypted.layers.iter().map(|l| l.layer).collect();
        assert_eq!(
            kinds,
            vec![
                LayerKind::BlockTranspose,
                LayerKind::AsciiArithmetic,
                LayerKind::AdaptiveShift
            ]
        );
        assert_eq!(decrypted.layers[0].name, "Reversing Layer 3: Block Transpose");
        assert_eq!(decrypted.result, "Hello");
    }

    #[test]
    fn test_layers_chain_input_to_output() {
        let result = CipherEngine::new().encrypt("Chained layers 42").unwrap();

        assert_eq!(result.layers[0].input, result.input);
        for pair in result.layers.windows(2) {
            assert_eq!(pair[0].output, pair[1].input);
        }
        assert_eq!(result.layers[2].output, result.result);
    }

    #[test]
    fn test_strict_policy_rejects_before_any_layer() {
        let engine = CipherEngine::with_policy(CharacterPolicy::Strict);
        let err = engine.encrypt("tab\there").unwrap_err();
        assert!(matches!(
            err,
            CipherError::UnsupportedCharacter { character: '\t', index: 3 }
        ));
    }

    #[test]
    fn test_strict_policy_round_trip() {
        let engine = CipherEngine::with_policy(CharacterPolicy::Strict);
        let encrypted = engine.encrypt("Strict, printable: 100%").unwrap();
        let decrypted = engine.decrypt(&encrypted.result).unwrap();
        assert_eq!(decrypted.result, "Strict, printable: 100%");
    }

    #[test]
    fn test_with_config() {
        let config = EngineConfig {
            character_policy: CharacterPolicy::Strict,
            ..EngineConfig::default()
        };
        assert_eq!(CipherEngine::with_config(&config).policy(), CharacterPolicy::Strict);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CipherEngine>();
    }
}
