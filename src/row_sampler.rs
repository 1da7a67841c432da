//! Row Sampler (spec section 4.2).
//!
//! Selects horizontal scan rows at fixed vertical fractions, center rows
//! first, so a clean center scan lets the orchestrator short-circuit.

use crate::constants::ROW_FRACTIONS;

/// Produces the ordered list of row indices to probe for an image of
/// height `height`. Fractions map to `floor(height * f)`; duplicate
/// indices (small images) are kept as-is — the orchestrator simply
/// redoes a little work, which is harmless since every attempt is pure.
pub fn sample_rows(height: u32) -> Vec<u32> {
    ROW_FRACTIONS
        .iter()
        .map(|f| ((height as f64) * f).floor() as u32)
        .map(|y| y.min(height.saturating_sub(1)))
        .collect()
}
