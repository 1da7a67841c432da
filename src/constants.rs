//! Symbology constants and the fixed tuning knobs of the decode pipeline.
//!
//! Values here are spec-mandated (start/stop codes, checksum radix,
//! narrow:wide ratio) or empirically tuned by the reference pipeline
//! (row fractions, tolerance sweep, search-window caps). None of these
//! are recomputed per call.

/// 7-bit code of the start glyph.
pub const START_CODE: u8 = 95;
/// 7-bit code of the stop glyph.
pub const STOP_CODE: u8 = 122;
/// Modulus of the Telepen checksum.
pub const CHECKSUM_RADIX: i32 = 127;

/// Lower bound of the single-digit Numeric glyph range (inclusive).
pub const SINGLE_DIGIT_LOW: u8 = 17;
/// Upper bound of the single-digit Numeric glyph range (inclusive).
pub const SINGLE_DIGIT_HIGH: u8 = 26;
/// Lower bound of the digit-pair Numeric glyph range (inclusive).
pub const DIGIT_PAIR_LOW: u8 = 27;
/// Upper bound of the digit-pair Numeric glyph range (inclusive).
pub const DIGIT_PAIR_HIGH: u8 = 126;

/// Accepted narrow:wide ratio band.
pub const MIN_WIDE_RATIO: f64 = 2.5;
pub const MAX_WIDE_RATIO: f64 = 3.5;

/// Otsu fallback threshold used when the computed threshold degenerates
/// to 0 or 255 (spec section 4.3).
pub const FALLBACK_THRESHOLD: u8 = 128;

/// Minimum number of runs a row must produce to be worth attempting
/// (spec section 4.4).
pub const MIN_RUNS: usize = 20;

/// Width estimator sampling bounds (spec section 4.5).
pub const MAX_WIDTH_SAMPLES: usize = 100;
pub const MIN_WIDTH_SAMPLES: usize = 10;
pub const KMEANS_ITERATIONS: usize = 10;
/// Fallback percentile used when the k-means ratio check fails.
pub const FALLBACK_PERCENTILE: f64 = 0.30;

/// Bound on the start-glyph search window (spec section 4.7).
pub const START_SEARCH_WINDOW: usize = 20;
/// Consecutive glyph misses tolerated before an attempt is abandoned.
pub const MISS_BUDGET: u32 = 2;
/// Minimum number of matched glyphs (>=1 data glyph + checksum).
pub const MIN_GLYPH_COUNT: usize = 2;

/// Vertical fractions probed by the row sampler, in search order (spec
/// section 4.2). Center rows first so a clean center scan short-circuits
/// the orchestrator.
pub const ROW_FRACTIONS: [f64; 9] = [0.50, 0.45, 0.55, 0.40, 0.60, 0.35, 0.65, 0.30, 0.70];

/// Tolerance sweep driven by the orchestrator (spec section 4.9). The
/// classifier's decision rule ignores this value (see DESIGN.md); it
/// exists only to force distinct re-attempts, preserved from the source
/// behavior.
pub const TOLERANCES: [f64; 6] = [0.30, 0.35, 0.40, 0.45, 0.50, 0.25];
