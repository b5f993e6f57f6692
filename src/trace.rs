//! Execution trace model
//!
//! Every layer reports how each unit of its input became output. Layers 1
//! and 2 emit one [`StepRecord`] per character, Layer 3 emits one
//! [`BlockStep`] per block. Records are produced in input order and are
//! never mutated after the layer returns.

use serde::{Deserialize, Serialize};

// ============================================================================
// Layer Identity
// ============================================================================

/// Identity of a pipeline layer, independent of direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    AdaptiveShift,
    AsciiArithmetic,
    BlockTranspose,
}

impl LayerKind {
    /// Position of the layer in the encryption order (1-based)
    pub fn number(self) -> u8 {
        match self {
            LayerKind::AdaptiveShift => 1,
            LayerKind::AsciiArithmetic => 2,
            LayerKind::BlockTranspose => 3,
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            LayerKind::AdaptiveShift => "Adaptive Shift",
            LayerKind::AsciiArithmetic => "ASCII Arithmetic",
            LayerKind::BlockTranspose => "Block Transpose",
        }
    }
}

// ============================================================================
// Per-character Steps
// ============================================================================

/// Substitution rule applied by Layer 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftRule {
    LetterShift,
    DigitShift,
    Passthrough,
}

impl ShiftRule {
    /// Rule name as it appears in serialized traces
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftRule::LetterShift => "letter-shift",
            ShiftRule::DigitShift => "digit-shift",
            ShiftRule::Passthrough => "passthrough",
        }
    }
}

/// One character processed by the adaptive shift layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStep {
    /// Character index within the layer input
    pub index: usize,
    pub input: char,
    pub rule: ShiftRule,
    /// Shift magnitude; subtracted when decrypting
    pub shift: u8,
    pub output: char,
}

/// One character processed by the ASCII arithmetic layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticStep {
    /// Character index within the layer input
    pub index: usize,
    pub input: char,
    pub input_ascii: u32,
    /// Position-derived key `k = (7i + 3) mod 95`
    pub key: u32,
    pub formula: String,
    pub output: char,
    pub output_ascii: u32,
}

/// A per-character trace entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepRecord {
    Shift(ShiftStep),
    Arithmetic(ArithmeticStep),
}

impl StepRecord {
    pub fn index(&self) -> usize {
        match self {
            StepRecord::Shift(step) => step.index,
            StepRecord::Arithmetic(step) => step.index,
        }
    }

    pub fn input(&self) -> char {
        match self {
            StepRecord::Shift(step) => step.input,
            StepRecord::Arithmetic(step) => step.input,
        }
    }

    pub fn output(&self) -> char {
        match self {
            StepRecord::Shift(step) => step.output,
            StepRecord::Arithmetic(step) => step.output,
        }
    }
}

// ============================================================================
// Per-block Steps
// ============================================================================

/// What Layer 3 did with a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOperation {
    /// Reversed and exchanged with its pair partner
    Swapped,
    /// Unpaired full block, reversed without moving
    ReversedInPlace,
    /// Trailing short block, left untouched
    Passthrough,
}

/// One block processed by the block transpose layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStep {
    /// Block index within the layer input
    pub index: usize,
    pub original: String,
    pub transformed: String,
    /// Block index the transformed block occupies in the output
    pub destination: usize,
    pub operation: BlockOperation,
}

// ============================================================================
// Layer Trace & Results
// ============================================================================

/// Ordered trace of one layer execution
///
/// Serializes as `{"steps": [...]}` or `{"blocks": [...]}` so a flattened
/// [`LayerResult`] carries exactly one of the two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerTrace {
    Steps(Vec<StepRecord>),
    Blocks(Vec<BlockStep>),
}

impl LayerTrace {
    /// Number of records in the trace
    pub fn len(&self) -> usize {
        match self {
            LayerTrace::Steps(steps) => steps.len(),
            LayerTrace::Blocks(blocks) => blocks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-character steps, empty for block traces
    pub fn steps(&self) -> &[StepRecord] {
        match self {
            LayerTrace::Steps(steps) => steps,
            LayerTrace::Blocks(_) => &[],
        }
    }

    /// Per-block steps, empty for character traces
    pub fn blocks(&self) -> &[BlockStep] {
        match self {
            LayerTrace::Steps(_) => &[],
            LayerTrace::Blocks(blocks) => blocks,
        }
    }

    /// Number of input characters covered by the trace
    pub fn covered_chars(&self) -> usize {
        match self {
            LayerTrace::Steps(steps) => steps.len(),
            LayerTrace::Blocks(blocks) => blocks.iter().map(|b| b.original.chars().count()).sum(),
        }
    }
}

/// What a layer hands back to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOutput {
    pub output: String,
    pub formula: Option<String>,
    pub trace: LayerTrace,
}

/// One layer's contribution to a [`crate::CipherResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerResult {
    /// Originating layer, regardless of direction
    pub layer: LayerKind,
    pub name: String,
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(flatten)]
    pub trace: LayerTrace,
}
