use thiserror::Error;

/// Internal failure kinds produced while attempting to decode a single
/// row/direction/tolerance combination.
///
/// None of these ever reach [`crate::decode_telepen`]'s caller (spec
/// section 7): every variant is recoverable by abandoning the current
/// attempt and moving to the next one, so [`crate::decoder`] only ever
/// inspects `Err(_)` to decide "try the next thing", never to report a
/// cause.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelepenError {
    #[error("row contains no pixels")]
    EmptyInput,
    #[error("row produced fewer than the minimum number of runs")]
    TooFewRuns,
    #[error("unit width estimate failed validation")]
    InvalidWidthEstimate,
    #[error("start glyph not found within the search window")]
    StartNotFound,
    #[error("stop glyph not found before the miss budget was exhausted")]
    StopNotFound,
    #[error("consecutive glyph misses exceeded the miss budget")]
    MissBudgetExhausted,
    #[error("checksum did not match the received value")]
    ChecksumMismatch,
    #[error("fewer than two glyphs were matched")]
    TooFewGlyphs,
    #[error("decoded digit string was empty")]
    EmptyDigitString,
}
