//! Layer 3 - Block Transpose
//!
//! The input is cut into blocks of [`BLOCK_SIZE`] characters. Adjacent full
//! blocks are paired `(0, 1), (2, 3), ...`; each pair trades places and both
//! blocks are reversed. An unpaired last full block is reversed in place and
//! a trailing short block is left alone.
//!
//! Swapping and reversing are both involutions on a fixed partition, and the
//! partition depends only on the length, which the transform preserves. So
//! decoding is the same operation applied to the ciphertext.

use log::debug;

use super::Layer;
use crate::error::{CipherError, Result};
use crate::trace::{BlockOperation, BlockStep, LayerKind, LayerOutput, LayerTrace};

/// Characters per block
pub const BLOCK_SIZE: usize = 4;

// ============================================================================
// Block Partition
// ============================================================================

/// Block boundaries implied by an input length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPartition {
    /// Input length in characters
    pub length: usize,
    /// Number of blocks holding exactly `BLOCK_SIZE` characters
    pub full_blocks: usize,
    /// Length of the trailing short block (0 if none)
    pub remainder: usize,
}

impl BlockPartition {
    /// Compute the partition for an input of `length` characters
    pub fn for_length(length: usize) -> Self {
        Self {
            length,
            full_blocks: length / BLOCK_SIZE,
            remainder: length % BLOCK_SIZE,
        }
    }

    /// Total number of blocks, including a short trailing one
    pub fn block_count(&self) -> usize {
        self.full_blocks + usize::from(self.remainder > 0)
    }

    /// What happens to block `index`
    pub fn operation(&self, index: usize) -> BlockOperation {
        if index >= self.full_blocks {
            BlockOperation::Passthrough
        } else if self.full_blocks % 2 == 1 && index == self.full_blocks - 1 {
            BlockOperation::ReversedInPlace
        } else {
            BlockOperation::Swapped
        }
    }

    /// Output block index for input block `index`
    pub fn destination(&self, index: usize) -> usize {
        match self.operation(index) {
            BlockOperation::Swapped => index ^ 1,
            BlockOperation::ReversedInPlace | BlockOperation::Passthrough => index,
        }
    }

    /// Check that `blocks` is exactly the partition this length implies
    fn verify(&self, blocks: &[&[char]]) -> Result<()> {
        let covered: usize = blocks.iter().map(|b| b.len()).sum();
        let shapes_match = blocks.len() == self.block_count()
            && blocks.iter().enumerate().all(|(i, b)| {
                let expected = if i < self.full_blocks {
                    BLOCK_SIZE
                } else {
                    self.remainder
                };
                b.len() == expected
            });

        if covered != self.length || !shapes_match {
            return Err(CipherError::BlockLengthMismatch {
                length: self.length,
                block_size: BLOCK_SIZE,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Block Transpose Layer
// ============================================================================

/// Layer 3: block-level permutation for positional diffusion
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockTranspose;

impl BlockTranspose {
    pub fn new() -> Self {
        Self
    }

    fn permute(&self, chars: &[char], blocks: &[&[char]], partition: &BlockPartition) -> LayerOutput {
        let mut slots: Vec<Vec<char>> = vec![Vec::new(); blocks.len()];
        let mut steps = Vec::with_capacity(blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            let operation = partition.operation(index);
            let transformed: Vec<char> = match operation {
                BlockOperation::Passthrough => block.to_vec(),
                BlockOperation::Swapped | BlockOperation::ReversedInPlace => {
                    block.iter().rev().copied().collect()
                }
            };
            let destination = partition.destination(index);

            steps.push(BlockStep {
                index,
                original: block.iter().collect(),
                transformed: transformed.iter().collect(),
                destination,
                operation,
            });
            slots[destination] = transformed;
        }

        let mut output = String::with_capacity(chars.len());
        for slot in &slots {
            output.extend(slot.iter());
        }

        LayerOutput {
            output,
            formula: None,
            trace: LayerTrace::Blocks(steps),
        }
    }
}

impl Layer for BlockTranspose {
    fn kind(&self) -> LayerKind {
        LayerKind::BlockTranspose
    }

    fn encode(&self, input: &str) -> Result<LayerOutput> {
        let chars: Vec<char> = input.chars().collect();
        let blocks: Vec<&[char]> = chars.chunks(BLOCK_SIZE).collect();
        let partition = BlockPartition::for_length(chars.len());

        debug!(
            "[LAYER-3] transposing {} blocks ({} full)",
            partition.block_count(),
            partition.full_blocks
        );
        Ok(self.permute(&chars, &blocks, &partition))
    }

    fn decode(&self, input: &str) -> Result<LayerOutput> {
        let chars: Vec<char> = input.chars().collect();
        let blocks: Vec<&[char]> = chars.chunks(BLOCK_SIZE).collect();

        // Boundaries come from the ciphertext length alone
        let partition = BlockPartition::for_length(chars.len());
        partition.verify(&blocks)?;

        debug!(
            "[LAYER-3] restoring {} blocks ({} full)",
            partition.block_count(),
            partition.full_blocks
        );
        Ok(self.permute(&chars, &blocks, &partition))
    }
}

// ============================================================================
// Tests
// ============================================================================
