//! Layer 2 - ASCII Arithmetic
//!
//! Modular addition over the printable ASCII range [32, 126]. Each position
//! gets its own key `k = (7i + 3) mod 95`, so no external secret is
//! involved. Subtraction mod 95 undoes the addition exactly.
//!
//! Code points outside the printable range (control characters, non-ASCII)
//! pass through unchanged and are recorded with formula `"passthrough"`.

use log::debug;

use super::Layer;
use crate::error::Result;
use crate::trace::{ArithmeticStep, LayerKind, LayerOutput, LayerTrace, StepRecord};

// ============================================================================
// Constants
// ============================================================================

/// Lowest printable ASCII code point (space)
const PRINTABLE_MIN: u32 = 32;

/// Highest printable ASCII code point (tilde)
const PRINTABLE_MAX: u32 = 126;

/// Size of the printable range
const PRINTABLE_SPAN: u32 = PRINTABLE_MAX - PRINTABLE_MIN + 1;

const KEY_MULTIPLIER: usize = 7;
const KEY_OFFSET: usize = 3;

/// Per-step formula for the forward transform
pub const ENCODE_FORMULA: &str = "(a - 32 + k) mod 95 + 32";

/// Per-step formula for the inverse transform
pub const DECODE_FORMULA: &str = "((c - 32 - k) mod 95 + 95) mod 95 + 32";

/// Formula recorded for characters outside the printable range
pub const PASSTHROUGH_FORMULA: &str = "passthrough";

const ENCODE_LAYER_FORMULA: &str = "f(a) = (a - 32 + k) mod 95 + 32, k = (7i + 3) mod 95";
const DECODE_LAYER_FORMULA: &str =
    "f⁻¹(c) = ((c - 32 - k) mod 95 + 95) mod 95 + 32, k = (7i + 3) mod 95";

// ============================================================================
// Helper Functions
// ============================================================================

/// Key for character index `index`: `(7i + 3) mod 95`
#[inline]
pub fn key_at(index: usize) -> u32 {
    (((index % PRINTABLE_SPAN as usize) * KEY_MULTIPLIER + KEY_OFFSET) % PRINTABLE_SPAN as usize)
        as u32
}

#[inline]
fn is_printable(code: u32) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&code)
}

/// Forward transform of a printable code point
#[inline]
pub fn encode_code(a: u32, key: u32) -> u32 {
    (a - PRINTABLE_MIN + key) % PRINTABLE_SPAN + PRINTABLE_MIN
}

/// Inverse transform of a printable code point
#[inline]
pub fn decode_code(c: u32, key: u32) -> u32 {
    (c - PRINTABLE_MIN + PRINTABLE_SPAN - key % PRINTABLE_SPAN) % PRINTABLE_SPAN + PRINTABLE_MIN
}

// ============================================================================
// ASCII Arithmetic Layer
// ============================================================================

/// Layer 2: modular arithmetic diffusion over code points
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiArithmetic;

impl AsciiArithmetic {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, input: &str, forward: bool) -> LayerOutput {
        let mut output = String::with_capacity(input.len());
        let mut steps = Vec::with_capacity(input.len());

        for (index, c) in input.chars().enumerate() {
            let code = c as u32;
            let key = key_at(index);

            let (mapped, formula) = if is_printable(code) {
                let mapped = if forward {
                    encode_code(code, key)
                } else {
                    decode_code(code, key)
                };
                let formula = if forward {
                    ENCODE_FORMULA
                } else {
                    DECODE_FORMULA
                };
                // Printable range maps onto itself, so this is always ASCII
                (char::from(mapped as u8), formula)
            } else {
                (c, PASSTHROUGH_FORMULA)
            };

            output.push(mapped);
            steps.push(StepRecord::Arithmetic(ArithmeticStep {
                index,
                input: c,
                input_ascii: code,
                key,
                formula: formula.to_string(),
                output: mapped,
                output_ascii: mapped as u32,
            }));
        }

        debug!(
            "[LAYER-2] {} {} chars",
            if forward { "diffused" } else { "restored" },
            steps.len()
        );

        let formula = if forward {
            ENCODE_LAYER_FORMULA
        } else {
            DECODE_LAYER_FORMULA
        };

        LayerOutput {
            output,
            formula: Some(formula.to_string()),
            trace: LayerTrace::Steps(steps),
        }
    }
}

impl Layer for AsciiArithmetic {
    fn kind(&self) -> LayerKind {
        LayerKind::AsciiArithmetic
    }

    fn encode(&self, input: &str) -> Result<LayerOutput> {
        Ok(self.run(input, true))
    }

    fn decode(&self, input: &str) -> Result<LayerOutput> {
        Ok(self.run(input, false))
    }
}

// ============================================================================
// Tests
// ============================================================================
