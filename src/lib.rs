/*!
# telepen-rs

`telepen-rs` is a pure Rust decoder for the Telepen Numeric one-dimensional
barcode symbology. It reads a rectangular RGBA raster and returns the
encoded digit string, or reports that no valid barcode was found.

## Pipeline

Grayscale reduction -> adaptive (Otsu) thresholding -> run-length
segmentation -> unit-width estimation -> element classification ->
start/stop framing -> glyph matching -> checksum verification -> digit
reconstruction. See `pattern_table`, `row_sampler`, `binarizer`,
`run_extractor`, `width_estimator`, `element_classifier`, `framer`,
`digit_decoder`, and `decoder` for one stage each.

## Scope

Only Telepen Numeric is decoded (not ASCII full mode). The decoder does
not locate a barcode within a larger image; it probes fixed horizontal
scan lines. It does not correct skew or perspective, and never returns a
result without a valid checksum.

## Safety
The decode pipeline itself (everything outside `ffi`) is written in safe
Rust; only the C FFI boundary uses `unsafe` to dereference caller-owned
pointers.
*/

pub mod binarizer;
pub mod constants;
pub mod decoder;
pub mod digit_decoder;
pub mod element_classifier;
pub mod error;
pub mod framer;
pub mod pattern_table;
pub mod row_sampler;
pub mod run_extractor;
pub mod width_estimator;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use decoder::{decode_telepen, DecodedRecord, ImageSource, RasterImage};
pub use error::TelepenError;

#[cfg(test)]
mod tests {
    #[test]
    fn smoke_test() {
        assert!(true);
    }
}
