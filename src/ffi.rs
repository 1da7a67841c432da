//! C Foreign Function Interface for telepen-rs.
//!
//! Provides C-compatible functions with an opaque handle, for use from
//! mobile/native scanning shims that already own an RGBA frame buffer.

use std::os::raw::{c_char, c_uchar};
use std::ptr;

use crate::decoder::{decode_telepen, RasterImage};

/// Opaque decoder handle.
#[repr(C)]
pub struct TelepenDecoder {
    _private: [u8; 0],
}

struct DecoderState {
    image: RasterImage,
}

/// Creates a decoder from an RGBA buffer (`4 * width * height` bytes).
///
/// Returns null if `data` is null, `len` doesn't match `width *
/// height * 4`, or `width`/`height` is zero.
///
/// # Safety
/// `data` must be a valid pointer to `len` bytes.
#[unsafe(no_mangle)]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub unsafe extern "C" fn telepen_decoder_new(
    data: *const c_uchar,
    len: usize,
    width: u32,
    height: u32,
) -> *mut TelepenDecoder {
    if data.is_null() || width == 0 || height == 0 {
        return ptr::null_mut();
    }
    if len != 4 * width as usize * height as usize {
        return ptr::null_mut();
    }

    let slice = unsafe { std::slice::from_raw_parts(data, len) };
    let state = Box::new(DecoderState {
        image: RasterImage::new(width, height, slice.to_vec()),
    });
    Box::into_raw(state) as *mut TelepenDecoder
}

/// Frees a decoder handle.
///
/// # Safety
/// `decoder` must be a valid handle from [`telepen_decoder_new`], not
/// already freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn telepen_decoder_free(decoder: *mut TelepenDecoder) {
    if !decoder.is_null() {
        let _ = unsafe { Box::from_raw(decoder as *mut DecoderState) };
    }
}

/// Decodes the barcode, returning a heap-allocated, NUL-terminated
/// C string of decimal digits, or null if no barcode was found.
/// The caller must free a non-null result with [`telepen_free_string`].
///
/// # Safety
/// `decoder` must be a valid handle from [`telepen_decoder_new`].
#[unsafe(no_mangle)]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub unsafe extern "C" fn telepen_decoder_decode(decoder: *mut TelepenDecoder) -> *mut c_char {
    if decoder.is_null() {
        return ptr::null_mut();
    }
    let state = unsafe { &*(decoder as *mut DecoderState) };

    match decode_telepen(&state.image) {
        Some(text) => std::ffi::CString::new(text)
            .map(|c| c.into_raw())
            .unwrap_or(ptr::null_mut()),
        None => ptr::null_mut(),
    }
}

/// Frees a string previously returned by [`telepen_decoder_decode`].
///
/// # Safety
/// `s` must either be null or a pointer previously returned by
/// [`telepen_decoder_decode`], not already freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn telepen_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = unsafe { std::ffi::CString::from_raw(s) };
    }
}
