//! Plain-text trace rendering
//!
//! The engine always returns full traces; truncation happens here.

use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::pipeline::{CipherResult, Direction};
use crate::trace::{BlockOperation, BlockStep, LayerResult, LayerTrace, StepRecord};

/// Render a full result: one section per layer, then a summary
pub fn render_result(result: &CipherResult, display: &DisplayConfig) -> String {
    let mut out = String::new();

    let title = match result.direction {
        Direction::Encrypt => "ENCRYPTION",
        Direction::Decrypt => "DECRYPTION",
    };
    let _ = writeln!(out, "{} ({} characters)", title, result.length());
    let _ = writeln!(out, "{:=<60}", "");

    for layer in &result.layers {
        out.push_str(&render_layer(layer, display));
        out.push('\n');
    }

    let _ = writeln!(out, "{:-<60}", "");
    let _ = writeln!(out, "Result: {}", result.result);
    out
}

/// Render a single layer section
pub fn render_layer(layer: &LayerResult, display: &DisplayConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", layer.name);
    let _ = writeln!(out, "  Input:   {}", layer.input);
    let _ = writeln!(out, "  Output:  {}", layer.output);
    if let Some(formula) = &layer.formula {
        let _ = writeln!(out, "  Formula: {}", formula);
    }

    match &layer.trace {
        LayerTrace::Steps(steps) => {
            for step in steps.iter().take(display.step_limit) {
                let _ = writeln!(out, "  {}", render_step(step));
            }
            if steps.len() > display.step_limit {
                let _ = writeln!(out, "  ... and {} more steps", steps.len() - display.step_limit);
            }
        }
        LayerTrace::Blocks(blocks) if display.show_blocks => {
            for block in blocks {
                let _ = writeln!(out, "  {}", render_block(block));
            }
        }
        LayerTrace::Blocks(_) => {}
    }

    out
}

fn render_step(step: &StepRecord) -> String {
    match step {
        StepRecord::Shift(s) => format!(
            "[{}] {:?} ({}, shift {}) -> {:?}",
            s.index,
            s.input,
            s.rule.as_str(),
            s.shift,
            s.output
        ),
        StepRecord::Arithmetic(s) => format!(
            "[{}] {:?} (ASCII {}) | k={} | {} -> {:?} (ASCII {})",
            s.index, s.input, s.input_ascii, s.key, s.formula, s.output, s.output_ascii
        ),
    }
}

fn render_block(block: &BlockStep) -> String {
    let note = match block.operation {
        BlockOperation::Swapped => format!("swapped to block {}", block.destination),
        BlockOperation::ReversedInPlace => "reversed in place".to_string(),
        BlockOperation::Passthrough => "passthrough".to_string(),
    };
    format!(
        "[{}] {:?} -> {:?} ({})",
        block.index, block.original, block.transformed, note
    )
}
