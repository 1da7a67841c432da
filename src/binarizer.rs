//! Binarizer (spec section 4.3): RGBA row -> grayscale + Otsu threshold.

use crate::error::TelepenError;

/// Per-pixel luminance, no clamping (R, G, B are already byte-valued so
/// the weighted sum never exceeds 255).
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Converts an interleaved RGBA row (`4*width` bytes) to a grayscale row
/// and computes its Otsu threshold.
///
/// Returns [`TelepenError::EmptyInput`] for a zero-length row.
pub fn binarize(row: &[u8]) -> Result<(Vec<f64>, u8), TelepenError> {
    if row.is_empty() {
        return Err(TelepenError::EmptyInput);
    }

    let gray: Vec<f64> = row
        .chunks_exact(4)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();

    if gray.is_empty() {
        return Err(TelepenError::EmptyInput);
    }

    let threshold = otsu_threshold(&gray);
    Ok((gray, threshold))
}

/// Otsu's method on the 256-bin histogram of the clamped, floored
/// grayscale values. Ties break to the lowest threshold achieving the
/// maximum between-class variance. A degenerate result (0 or 255) is
/// replaced by [`crate::constants::FALLBACK_THRESHOLD`].
fn otsu_threshold(gray: &[f64]) -> u8 {
    let mut histogram = [0u32; 256];
    for &v in gray {
        let bin = v.floor().clamp(0.0, 255.0) as usize;
        histogram[bin] += 1;
    }

    let total = gray.len() as f64;
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut sum_background = 0.0;
    let mut weight_background = 0.0;
    let mut best_threshold = 0usize;
    let mut best_variance = -1.0;

    for t in 0..256 {
        weight_background += histogram[t] as f64;
        if weight_background == 0.0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }
        sum_background += t as f64 * histogram[t] as f64;
        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum_total - sum_background) / weight_foreground;
        let diff = mean_background - mean_foreground;
        let variance = weight_background * weight_foreground * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            best_threshold = t;
        }
    }

    if best_threshold == 0 || best_threshold == 255 {
        crate::constants::FALLBACK_THRESHOLD
    } else {
        best_threshold as u8
    }
}
