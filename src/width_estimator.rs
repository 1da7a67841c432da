//! Width Estimator (spec section 4.5): two-cluster k-means estimate of
//! the narrow unit width, with a percentile fallback when the wide:narrow
//! ratio doesn't validate.

use crate::constants::{
    KMEANS_ITERATIONS, MAX_WIDE_RATIO, MAX_WIDTH_SAMPLES, MIN_WIDE_RATIO, MIN_WIDTH_SAMPLES,
};
use crate::error::TelepenError;
use crate::run_extractor::Run;

/// Estimates the narrow unit width from up to [`MAX_WIDTH_SAMPLES`] run
/// lengths starting at `start_idx`, excluding the trailing run (the
/// trailing quiet zone). Requires at least [`MIN_WIDTH_SAMPLES`] samples.
pub fn estimate_narrow(runs: &[Run], start_idx: usize) -> Result<f64, TelepenError> {
    if start_idx >= runs.len() {
        return Err(TelepenError::InvalidWidthEstimate);
    }

    let available = &runs[start_idx..runs.len().saturating_sub(1)];
    let sample_count = available.len().min(MAX_WIDTH_SAMPLES);
    if sample_count < MIN_WIDTH_SAMPLES {
        return Err(TelepenError::InvalidWidthEstimate);
    }

    let samples: Vec<f64> = available[..sample_count]
        .iter()
        .map(|r| r.length as f64)
        .collect();

    let (narrow, wide) = kmeans_two_centers(&samples);
    let ratio = wide / narrow;
    if narrow > 0.0 && (MIN_WIDE_RATIO..=MAX_WIDE_RATIO).contains(&ratio) {
        return Ok(narrow);
    }

    Ok(percentile_fallback(&samples))
}

fn kmeans_two_centers(samples: &[f64]) -> (f64, f64) {
    let mut narrow = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut wide = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    for _ in 0..KMEANS_ITERATIONS {
        let mut narrow_sum = 0.0;
        let mut narrow_count = 0usize;
        let mut wide_sum = 0.0;
        let mut wide_count = 0usize;

        for &s in samples {
            if (s - narrow).abs() <= (s - wide).abs() {
                narrow_sum += s;
                narrow_count += 1;
            } else {
                wide_sum += s;
                wide_count += 1;
            }
        }

        if narrow_count > 0 {
            narrow = narrow_sum / narrow_count as f64;
        }
        if wide_count > 0 {
            wide = wide_sum / wide_count as f64;
        }
    }

    (narrow, wide)
}

/// 30th-percentile median fallback: sort ascending, take the lower 30%,
/// return its median.
fn percentile_fallback(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let cut = ((sorted.len() as f64) * crate::constants::FALLBACK_PERCENTILE)
        .ceil()
        .max(1.0) as usize;
    let lower = &sorted[..cut.min(sorted.len())];

    let mid = lower.len() / 2;
    if lower.len() % 2 == 0 {
        (lower[mid - 1] + lower[mid]) / 2.0
    } else {
        lower[mid]
    }
}
