//! Black-box end-to-end scenarios against synthetic raster images,
//! exercising the full pipeline through the public `decode_telepen` entry
//! point. Mirrors the scenario table in the specification (quiet zones,
//! mirrored scan direction, single-element corruption, bad checksum,
//! uniform/no-signal input, and a one-row image).

use telepen_rs::constants::{CHECKSUM_RADIX, START_CODE, STOP_CODE};
use telepen_rs::pattern_table::tele_table;
use telepen_rs::{decode_telepen, RasterImage};

const NARROW_PX: u32 = 4;
const WIDE_PX: u32 = 12;
const QUIET_PX: u32 = 40;

fn checksum_for(data: &[u8]) -> u8 {
    let sum: i32 = data.iter().map(|&g| g as i32).sum();
    ((CHECKSUM_RADIX - (sum % CHECKSUM_RADIX)) % CHECKSUM_RADIX) as u8
}

/// Builds the full start..stop glyph code sequence for a digit-pair-only
/// payload (every digit string used below has even length).
fn codes_for_digit_pairs(pairs: &[u8]) -> Vec<u8> {
    let data: Vec<u8> = pairs.iter().map(|&p| 27 + p).collect();
    let checksum = checksum_for(&data);
    let mut codes = vec![START_CODE];
    codes.extend(data);
    codes.push(checksum);
    codes.push(STOP_CODE);
    codes
}

/// Expands a glyph code sequence into a `{1, 3}` element stream.
fn codes_to_elements(codes: &[u8]) -> Vec<u8> {
    codes.iter().flat_map(|&c| tele_table(c).elements()).collect()
}

/// Each run's pixel range in the built row, alongside whether it is a bar.
struct Run {
    start: usize,
    end: usize,
    is_bar: bool,
}

/// Renders an element stream into one pixel row (RGB triples), flanked by
/// quiet zones, and returns the row alongside every run's pixel range.
fn build_row(elements: &[u8]) -> (Vec<(u8, u8, u8)>, Vec<Run>) {
    let white = (255u8, 255u8, 255u8);
    let black = (0u8, 0u8, 0u8);

    let mut pixels = Vec::new();
    let mut runs = Vec::new();

    let start = pixels.len();
    pixels.extend(std::iter::repeat(white).take(QUIET_PX as usize));
    runs.push(Run { start, end: pixels.len(), is_bar: false });

    let mut is_bar = true;
    for &e in elements {
        let len_px = (if e == 1 { NARROW_PX } else { WIDE_PX }) as usize;
        let start = pixels.len();
        let color = if is_bar { black } else { white };
        pixels.extend(std::iter::repeat(color).take(len_px));
        runs.push(Run { start, end: pixels.len(), is_bar });
        is_bar = !is_bar;
    }

    let start = pixels.len();
    pixels.extend(std::iter::repeat(white).take(QUIET_PX as usize));
    runs.push(Run { start, end: pixels.len(), is_bar: false });

    (pixels, runs)
}

fn row_to_rgba(pixels: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len() * 4);
    for &(r, g, b) in pixels {
        out.extend_from_slice(&[r, g, b, 255]);
    }
    out
}

fn make_image(pixels: &[(u8, u8, u8)], height: u32) -> RasterImage {
    let row = row_to_rgba(pixels);
    let width = (row.len() / 4) as u32;
    let mut buf = Vec::with_capacity(row.len() * height as usize);
    for _ in 0..height {
        buf.extend_from_slice(&row);
    }
    RasterImage::new(width, height, buf)
}

fn mirror(pixels: &[(u8, u8, u8)]) -> Vec<(u8, u8, u8)> {
    pixels.iter().rev().copied().collect()
}

/// E1: a clean symbol encoding "1234567890" at height 50 decodes cleanly.
#[test]
fn e1_clean_symbol_decodes() {
    let codes = codes_for_digit_pairs(&[12, 34, 56, 78, 90]);
    let elements = codes_to_elements(&codes);
    let (pixels, _) = build_row(&elements);
    let image = make_image(&pixels, 50);

    assert_eq!(decode_telepen(&image), Some("1234567890".to_string()));
}

/// E2: the same symbol, mirrored horizontally, still decodes via the
/// orchestrator's reversed-direction attempt.
#[test]
fn e2_mirrored_symbol_decodes() {
    let codes = codes_for_digit_pairs(&[12, 34, 56, 78, 90]);
    let elements = codes_to_elements(&codes);
    let (pixels, _) = build_row(&elements);
    let mirrored = mirror(&pixels);
    let image = make_image(&mirrored, 50);

    assert_eq!(decode_telepen(&image), Some("1234567890".to_string()));
}

/// E3: flipping one bar run to a space (single-element corruption) breaks
/// framing badly enough that no row/direction/tolerance combination
/// recovers a checksummed, stop-terminated symbol.
#[test]
fn e3_single_bar_flip_fails() {
    let codes = codes_for_digit_pairs(&[12, 34, 56, 78, 90]);
    let elements = codes_to_elements(&codes);
    let (mut pixels, runs) = build_row(&elements);

    let victim = runs
        .iter()
        .find(|r| r.is_bar && r.start > (QUIET_PX as usize))
        .expect("at least one bar run after the leading quiet zone");
    for p in &mut pixels[victim.start..victim.end] {
        *p = (255, 255, 255);
    }

    let image = make_image(&pixels, 50);
    assert_eq!(decode_telepen(&image), None);
}

/// E4: substituting a wrong (but well-formed) checksum glyph is caught by
/// [`telepen_rs::digit_decoder::decode_digits`] and surfaces as no result.
#[test]
fn e4_wrong_checksum_fails() {
    let mut codes = codes_for_digit_pairs(&[12, 34, 56, 78, 90]);
    let checksum_idx = codes.len() - 2;
    let correct = codes[checksum_idx];
    codes[checksum_idx] = (correct + 1) % (CHECKSUM_RADIX as u8);

    let elements = codes_to_elements(&codes);
    let (pixels, _) = build_row(&elements);
    let image = make_image(&pixels, 50);

    assert_eq!(decode_telepen(&image), None);
}

/// E5: a uniform gray frame carries no runs at all and must not panic or
/// fabricate a result.
#[test]
fn e5_uniform_gray_has_no_barcode() {
    let pixels = vec![(200u8, 200u8, 200u8); 640];
    let image = make_image(&pixels, 100);
    assert_eq!(decode_telepen(&image), None);
}

/// E6: a single-row image still decodes; the row sampler clamps every
/// fraction to row 0.
#[test]
fn e6_single_row_image_decodes() {
    let codes = codes_for_digit_pairs(&[12, 34, 56, 78, 90]);
    let elements = codes_to_elements(&codes);
    let (pixels, _) = build_row(&elements);
    let image = make_image(&pixels, 1);

    assert_eq!(decode_telepen(&image), Some("1234567890".to_string()));
}

/// P4: mirroring twice is the identity, so the orchestrator's own
/// reversed-direction attempt recovers the same text either way round.
#[test]
fn p4_mirroring_is_reversible() {
    let codes = codes_for_digit_pairs(&[10, 20, 30, 40, 50]);
    let elements = codes_to_elements(&codes);
    let (pixels, _) = build_row(&elements);
    let mirrored_twice = mirror(&mirror(&pixels));

    let direct = make_image(&pixels, 40);
    let roundtrip = make_image(&mirrored_twice, 40);
    assert_eq!(decode_telepen(&direct), decode_telepen(&roundtrip));
    assert_eq!(decode_telepen(&direct), Some("1020304050".to_string()));
}

/// P7 (scaled down): random noise rows essentially never produce a
/// checksummed, stop-terminated symbol. The specification calls for
/// 10,000 rows at width 640 with a <0.1% false-positive rate; this test
/// uses a much smaller deterministic sample for practicality, since no
/// value here is sampled from a live RNG across runs (a fixed
/// linear-congruential sequence stands in for one so the test is
/// reproducible without pulling in a dependency just for this check).
#[test]
fn p7_random_noise_rarely_decodes() {
    let width = 640usize;
    let height = 40usize;
    let rows = 200;
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut false_positives = 0;
    for _ in 0..rows {
        let mut row = Vec::with_capacity(width * 4);
        for _ in 0..width {
            let v = (next() % 256) as u8;
            row.extend_from_slice(&[v, v, v, 255]);
        }
        let mut buf = Vec::with_capacity(row.len() * height);
        for _ in 0..height {
            buf.extend_from_slice(&row);
        }
        let image = RasterImage::new(width as u32, height as u32, buf);
        if decode_telepen(&image).is_some() {
            false_positives += 1;
        }
    }

    assert!(
        false_positives == 0,
        "{false_positives}/{rows} random rows produced a spurious decode"
    );
}
