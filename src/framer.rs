//! Framer & Matcher (spec section 4.7): locates the start glyph,
//! sequentially matches glyph patterns, and terminates on the stop glyph
//! or a bounded miss budget.

use crate::constants::{
    DIGIT_PAIR_HIGH, DIGIT_PAIR_LOW, MIN_GLYPH_COUNT, MISS_BUDGET, SINGLE_DIGIT_HIGH,
    SINGLE_DIGIT_LOW, START_CODE, START_SEARCH_WINDOW, STOP_CODE,
};
use crate::error::TelepenError;
use crate::pattern_table::tele_table;
use std::sync::LazyLock;

/// A decoded symbol: the matched glyph codes (data glyphs + checksum,
/// stop glyph excluded) and whether the stop pattern was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub glyphs: Vec<u8>,
    pub has_stop_char: bool,
}

/// Static search order: stop first (so termination is always detected),
/// then digit-pair glyphs, then single-digit glyphs, then the remaining
/// codes. Built once, per the Design Notes in spec section 9.
static SEARCH_ORDER: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let mut order = vec![STOP_CODE];
    order.extend(DIGIT_PAIR_LOW..=DIGIT_PAIR_HIGH);
    order.extend(SINGLE_DIGIT_LOW..=SINGLE_DIGIT_HIGH);
    for code in 0u8..=127 {
        if !order.contains(&code) {
            order.push(code);
        }
    }
    order
});

fn matches_at(elements: &[u8], idx: usize, code: u8) -> bool {
    let glyph = tele_table(code);
    let len = glyph.len as usize;
    if idx + len > elements.len() {
        return false;
    }
    elements[idx..idx + len] == glyph.elements()[..]
}

/// Attempts to decode a classified element stream into a [`Decoded`]
/// symbol. Returns an error describing why the attempt was abandoned;
/// none of these propagate past the orchestrator (spec section 7).
pub fn decode(elements: &[u8]) -> Result<Decoded, TelepenError> {
    let start_len = tele_table(START_CODE).len as usize;
    let window = elements.len().saturating_sub(start_len).min(START_SEARCH_WINDOW);

    let mut start_idx = None;
    for i in 0..=window {
        if matches_at(elements, i, START_CODE) {
            start_idx = Some(i);
            break;
        }
    }
    let Some(start_idx) = start_idx else {
        return Err(TelepenError::StartNotFound);
    };

    let mut idx = start_idx + start_len;
    let mut glyphs = Vec::new();
    let mut consecutive_misses = 0u32;
    let mut has_stop_char = false;

    while idx < elements.len() {
        let mut matched = None;
        for &code in SEARCH_ORDER.iter() {
            if matches_at(elements, idx, code) {
                matched = Some(code);
                break;
            }
        }

        match matched {
            Some(code) if code == STOP_CODE => {
                has_stop_char = true;
                break;
            }
            Some(code) => {
                glyphs.push(code);
                idx += tele_table(code).len as usize;
                consecutive_misses = 0;
            }
            None => {
                consecutive_misses += 1;
                idx += 1;
                if consecutive_misses >= MISS_BUDGET {
                    return Err(TelepenError::MissBudgetExhausted);
                }
            }
        }
    }

    if !has_stop_char {
        return Err(TelepenError::StopNotFound);
    }
    if glyphs.len() < MIN_GLYPH_COUNT {
        return Err(TelepenError::TooFewGlyphs);
    }

    Ok(Decoded { glyphs, has_stop_char })
}
