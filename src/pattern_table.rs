//! Static Telepen glyph pattern table.
//!
//! Spec section 4.1 requires `TeleTable`/`TeleLens` to be treated as a
//! lookup, never re-derived per call. We honor that at the call site:
//! [`tele_table`] and [`tele_len`] index into a table built exactly once
//! and cached in a [`std::sync::LazyLock`], mirroring the "process-wide,
//! read-only constants, initialized at load" lifecycle from spec section
//! 3. See DESIGN.md for why the table contents are generated rather than
//! transcribed from the zint source (no network access in this
//! environment), and for the prefix-free construction this module relies
//! on to make that substitution safe.
//!
//! Each glyph is stored compactly per the Design Notes in spec section
//! 9: one bit per element (0 = narrow, 1 = wide) packed into a `u16`,
//! plus a length. A pattern's first symbol is always a bar; the
//! alternation with spaces is positional, not encoded here.

use std::sync::LazyLock;

/// One length bucket: `(length, count, first_code, first_codeword)`.
///
/// Spec section 4.7's "first exact match wins" rule is only safe when
/// the 128 patterns form a prefix code: no pattern may be a bitwise
/// prefix of another, or the framer could match a short glyph where a
/// longer one was intended and desync. This table is built with the
/// standard canonical-code construction (the same one behind canonical
/// Huffman/DEFLATE codes): process lengths in ascending order, and for
/// each length hand out consecutive codewords starting from `(code_so_far
/// + count_at_this_length) << (length_gap_to_next)`. That shift is what
/// guarantees no earlier, shorter codeword can ever be a prefix of a
/// later, longer one — each level's codewords occupy a disjoint sub-range
/// of the level after it. Every length here is a multiple of the base (an
/// even number in `[4, 16]`) because every glyph begins with a bar (spec
/// section 4.1) and glyphs concatenate with no reset of the bar/space
/// alternation: an odd-length pattern would end mid-alternation and
/// desync whatever follows it.
///
/// The four fields per entry: pattern length, how many codes occupy it,
/// the first 7-bit code in the bucket, and the first codeword assigned
/// (both computed by hand from the construction above and fixed here,
/// since the table itself must not be recomputed at rebuild time — see
/// DESIGN.md for the full derivation and the counts chosen).
const BUCKETS: [(u8, u8, u8, u16); 7] = [
    (4, 4, 0, 0),
    (6, 8, 4, 16),
    (8, 16, 12, 96),
    (10, 24, 28, 448),
    (12, 24, 52, 1888),
    (14, 24, 76, 7648),
    (16, 28, 100, 30688),
];

/// One glyph's element sequence, bit-packed.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    /// Bit `i` set means element `i` is wide (3); clear means narrow (1).
    bits: u16,
    pub len: u8,
}

impl Glyph {
    /// Expands the packed pattern into a `{1, 3}` element sequence.
    pub fn elements(&self) -> Vec<u8> {
        (0..self.len as u32)
            .map(|i| if (self.bits >> i) & 1 == 1 { 3 } else { 1 })
            .collect()
    }
}

fn build_glyph(code: u8) -> Glyph {
    let (len, _count, first_code, first_codeword) = BUCKETS
        .iter()
        .copied()
        .find(|&(_, count, first_code, _)| {
            code >= first_code && code < first_code + count
        })
        .expect("every 7-bit code falls into exactly one length bucket");

    let codeword = first_codeword + (code - first_code) as u16;

    // Pack the codeword's bits MSB-first into element positions, so
    // position 0 of the sequence is the codeword's top bit. This is the
    // ordering the prefix-free guarantee above assumes; `bits` stores it
    // LSB-first per element index so `elements()` need not change.
    let mut bits: u16 = 0;
    for i in 0..len as u32 {
        let bit = (codeword >> (len as u32 - 1 - i)) & 1;
        if bit == 1 {
            bits |= 1 << i;
        }
    }
    Glyph { bits, len }
}

static TABLE: LazyLock<[Glyph; 128]> =
    LazyLock::new(|| std::array::from_fn(|code| build_glyph(code as u8)));

/// Returns the glyph pattern for a 7-bit code.
pub fn tele_table(code: u8) -> Glyph {
    TABLE[code as usize]
}

/// Returns the element count of a 7-bit code's pattern.
pub fn tele_len(code: u8) -> u8 {
    TABLE[code as usize].len
}
