//! Run Extractor (spec section 4.4): grayscale row + threshold -> runs.

use crate::constants::MIN_RUNS;
use crate::error::TelepenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub length: usize,
    pub is_bar: bool,
}

/// Splits a grayscale row into alternating bar/space runs. `is_bar` means
/// grayscale strictly less than `threshold`.
///
/// Rejects rows producing fewer than [`MIN_RUNS`] runs with
/// [`TelepenError::TooFewRuns`] — Telepen Numeric exceeds that even for a
/// single-pair payload.
pub fn extract_runs(gray: &[f64], threshold: u8) -> Result<Vec<Run>, TelepenError> {
    if gray.is_empty() {
        return Err(TelepenError::EmptyInput);
    }

    let threshold = threshold as f64;
    let mut runs = Vec::new();
    let mut current_is_bar = gray[0] < threshold;
    let mut current_len = 1usize;

    for &v in &gray[1..] {
        let is_bar = v < threshold;
        if is_bar == current_is_bar {
            current_len += 1;
        } else {
            runs.push(Run { length: current_len, is_bar: current_is_bar });
            current_is_bar = is_bar;
            current_len = 1;
        }
    }
    runs.push(Run { length: current_len, is_bar: current_is_bar });

    if runs.len() < MIN_RUNS {
        return Err(TelepenError::TooFewRuns);
    }

    Ok(runs)
}

/// Reverses a run sequence in place semantics (spec section 4.9: used to
/// emulate scanning the row right-to-left for upside-down symbols).
pub fn reversed(runs: &[Run]) -> Vec<Run> {
    runs.iter().rev().copied().collect()
}
