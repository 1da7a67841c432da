//! Orchestrator (spec section 4.9) and the public entry point.
//!
//! Iterates rows x directions x tolerance levels and returns the first
//! result whose checksum and stop glyph are both valid. Every attempt is
//! pure and stateless with respect to the others (spec section 5).

use crate::binarizer::binarize;
use crate::constants::TOLERANCES;
use crate::digit_decoder::decode_digits;
use crate::element_classifier::classify;
use crate::framer;
use crate::row_sampler::sample_rows;
use crate::run_extractor::{extract_runs, reversed, Run};
use crate::width_estimator::estimate_narrow;

/// A fully-formed decode attempt result (spec section 3's "Decoded
/// record"). Constructed by [`decode_from_elements`] and consumed only
/// by the orchestrator; a result is only ever surfaced to
/// [`decode_telepen`]'s caller when both flags are true and `text` is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub text: String,
    pub checksum_valid: bool,
    pub has_stop_char: bool,
}

/// Read-only access to a caller-owned raster image (spec section 6). The
/// core never owns or copies the backing pixels beyond what a single row
/// needs.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Returns the RGBA bytes (`4 * width()` long) for row `y`.
    fn row_pixels(&self, y: u32) -> &[u8];
}

/// A simple owned [`ImageSource`] backed by one contiguous RGBA buffer,
/// for tests, the CLI, and FFI/WASM callers that already have pixels in
/// memory.
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// `pixels` must be `4 * width * height` bytes, R,G,B,A order, rows
    /// stored top-to-bottom.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), 4 * width as usize * height as usize);
        Self { width, height, pixels }
    }
}

impl ImageSource for RasterImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row_pixels(&self, y: u32) -> &[u8] {
        let stride = 4 * self.width as usize;
        let start = stride * y as usize;
        &self.pixels[start..start + stride]
    }
}

/// Runs the framer/matcher and digit decoder over an already-classified
/// element stream, folding every internal failure into an "invalid"
/// [`DecodedRecord`] rather than propagating it (spec section 4.8's
/// combined `{text, checksumValid, hasStopChar}` record).
pub fn decode_from_elements(elements: &[u8]) -> DecodedRecord {
    match framer::decode(elements) {
        Ok(decoded) => match decode_digits(&decoded.glyphs) {
            Ok(text) => DecodedRecord { text, checksum_valid: true, has_stop_char: decoded.has_stop_char },
            Err(_) => DecodedRecord { text: String::new(), checksum_valid: false, has_stop_char: decoded.has_stop_char },
        },
        Err(_) => DecodedRecord { text: String::new(), checksum_valid: false, has_stop_char: false },
    }
}

/// Skips leading space runs to find the first bar run, the entry point
/// for width estimation and classification.
fn first_bar_index(runs: &[Run]) -> Option<usize> {
    runs.iter().position(|r| r.is_bar)
}

fn try_direction(runs: &[Run]) -> Option<String> {
    let start_idx = first_bar_index(runs)?;
    let narrow = estimate_narrow(runs, start_idx).ok()?;

    for &tolerance in TOLERANCES.iter() {
        let elements = classify(runs, start_idx, narrow, tolerance);
        let record = decode_from_elements(&elements);
        if record.checksum_valid && record.has_stop_char && !record.text.is_empty() {
            return Some(record.text);
        }
    }
    None
}

/// Attempts to decode a Telepen Numeric barcode from `image`. Returns
/// `None` if no row/direction/tolerance combination yields a valid,
/// checksummed, stop-terminated symbol (spec sections 4.9 and 7).
pub fn decode_telepen<I: ImageSource>(image: &I) -> Option<String> {
    for y in sample_rows(image.height()) {
        let row = image.row_pixels(y);
        let (gray, threshold) = match binarize(row) {
            Ok(v) => v,
            Err(_) => continue,
        };
        let runs = match extract_runs(&gray, threshold) {
            Ok(v) => v,
            Err(_) => continue,
        };

        if let Some(text) = try_direction(&runs) {
            return Some(text);
        }
        let flipped = reversed(&runs);
        if let Some(text) = try_direction(&flipped) {
            return Some(text);
        }
    }
    None
}
