//! Cipher Layers
//!
//! The three reversible stages of the pipeline:
//! - Layer 1: Adaptive shift (position-dependent substitution)
//! - Layer 2: ASCII arithmetic (modular diffusion over code points)
//! - Layer 3: Block transpose (swap-and-reverse of 4-character blocks)
//!
//! All layers implement the `Layer` trait so the pipeline can run them
//! uniformly in either order.

mod adaptive_shift;
mod ascii_arithmetic;
mod block_transpose;
mod classifier;

pub use adaptive_shift::AdaptiveShift;
pub use ascii_arithmetic::{
    decode_code, encode_code, key_at, AsciiArithmetic, DECODE_FORMULA, ENCODE_FORMULA,
    PASSTHROUGH_FORMULA,
};
pub use block_transpose::{BlockPartition, BlockTranspose, BLOCK_SIZE};
pub use classifier::{classify, CharClass};

use crate::error::Result;
use crate::trace::{LayerKind, LayerOutput};

/// Base trait for all cipher layers
///
/// Layers are stateless: `decode(encode(x).output).output == x` for every
/// input in the supported domain. Direction is chosen by the caller.
pub trait Layer: Send + Sync {
    /// Get the layer identity
    fn kind(&self) -> LayerKind;

    /// Apply the forward transform, recording one trace entry per unit
    fn encode(&self, input: &str) -> Result<LayerOutput>;

    /// Apply the inverse transform, recording one trace entry per unit
    fn decode(&self, input: &str) -> Result<LayerOutput>;
}

/// The layers in encryption order
pub fn default_layers() -> Vec<Box<dyn Layer>> {
    vec![
        Box::new(AdaptiveShift::new()),
        Box::new(AsciiArithmetic::new()),
        Box::new(BlockTranspose::new()),
    ]
}
