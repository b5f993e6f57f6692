//! Layer 1 - Adaptive Shift
//!
//! Position-dependent Caesar rotation. The character at index `i` is
//! rotated within its own alphabet (A-Z, a-z or 0-9) by a shift derived
//! from `i`, so the same letter encrypts differently at each position.
//! Rotation never changes a character's class, which is what lets the
//! decoder reclassify the ciphertext character and undo the shift.

use log::debug;

use super::classifier::{classify, CharClass};
use super::Layer;
use crate::error::Result;
use crate::trace::{LayerKind, LayerOutput, LayerTrace, ShiftStep, StepRecord};

/// Layer 1: position-dependent shift substitution
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveShift;

impl AdaptiveShift {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, input: &str, forward: bool) -> LayerOutput {
        let mut output = String::with_capacity(input.len());
        let mut steps = Vec::with_capacity(input.len());

        for (index, c) in input.chars().enumerate() {
            let class = classify(c);
            let shift = class.shift_at(index);
            let rotated = rotate(c, class, shift, forward);

            output.push(rotated);
            steps.push(StepRecord::Shift(ShiftStep {
                index,
                input: c,
                rule: class.rule(),
                shift,
                output: rotated,
            }));
        }

        debug!(
            "[LAYER-1] {} {} chars",
            if forward { "shifted" } else { "unshifted" },
            steps.len()
        );

        LayerOutput {
            output,
            formula: None,
            trace: LayerTrace::Steps(steps),
        }
    }
}

/// Rotate `c` within its alphabet by `shift`, forwards or backwards
fn rotate(c: char, class: CharClass, shift: u8, forward: bool) -> char {
    let Some((base, size)) = class.alphabet() else {
        return c;
    };

    let offset = c as u32 - base as u32;
    let shift = shift as u32 % size;
    let rotated = if forward {
        (offset + shift) % size
    } else {
        (offset + size - shift) % size
    };

    char::from(base + rotated as u8)
}

impl Layer for AdaptiveShift {
    fn kind(&self) -> LayerKind {
        LayerKind::AdaptiveShift
    }

    fn encode(&self, input: &str) -> Result<LayerOutput> {
        Ok(self.run(input, true))
    }

    fn decode(&self, input: &str) -> Result<LayerOutput> {
        Ok(self.run(input, false))
    }
}
