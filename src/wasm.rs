//! WebAssembly bindings for telepen-rs.
//!
//! Provides a JavaScript-compatible entry point via wasm-bindgen for use
//! in browsers and Node.js, for camera-pipeline callers that already have
//! an RGBA frame in memory.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::decoder::{decode_telepen, RasterImage};

/// Decodes a Telepen Numeric barcode from an RGBA frame.
///
/// # Arguments
/// * `data` - `4 * width * height` bytes, R,G,B,A order, rows top-to-bottom.
/// * `width`, `height` - frame dimensions in pixels.
///
/// # Returns
/// The decoded digit string, or `None` if no barcode was found.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn decode_telepen_wasm(data: &[u8], width: u32, height: u32) -> Option<String> {
    if data.len() != 4 * width as usize * height as usize {
        return None;
    }
    let image = RasterImage::new(width, height, data.to_vec());
    decode_telepen(&image)
}
