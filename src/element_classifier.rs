//! Element Classifier (spec section 4.6): maps runs to narrow/wide
//! elements, with quiet-zone trimming and absorption repair.

use crate::run_extractor::Run;

/// Classifies `runs[start_idx..]` into a `{1, 3}` element sequence using
/// nearest-center classification against `narrow` and `3*narrow`.
///
/// `tolerance` is accepted but intentionally unused in the decision
/// rule — see DESIGN.md / spec section 4.6 and the open question in
/// spec section 9: the orchestrator's tolerance sweep exists only to
/// force distinct re-attempts, not to change how a run is classified.
pub fn classify(runs: &[Run], start_idx: usize, narrow: f64, _tolerance: f64) -> Vec<u8> {
    if start_idx >= runs.len() {
        return Vec::new();
    }

    let wide = 3.0 * narrow;
    let mut end_idx = runs.len() - 1;
    let mut repaired = false;

    if !runs.is_empty() {
        let last = runs[end_idx];
        if !last.is_bar && (last.length as f64) > 2.0 * narrow {
            if end_idx == start_idx {
                return Vec::new();
            }
            end_idx -= 1;
            if runs[end_idx].is_bar {
                repaired = true;
            }
        }
    }

    let mut elements: Vec<u8> = runs[start_idx..=end_idx]
        .iter()
        .map(|r| {
            let len = r.length as f64;
            if (len - narrow).abs() < (len - wide).abs() {
                1
            } else {
                3
            }
        })
        .collect();

    if repaired {
        elements.push(1);
    }

    elements
}
