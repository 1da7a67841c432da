//! Python bindings for telepen-rs using PyO3.

use pyo3::prelude::*;

/// Decode a Telepen Numeric barcode from an RGBA frame.
///
/// Args:
///     data: `4 * width * height` bytes, R,G,B,A order, rows top-to-bottom.
///     width: frame width in pixels.
///     height: frame height in pixels.
///
/// Returns:
///     The decoded digit string, or `None` if no barcode was found.
#[pyfunction]
fn decode_telepen(data: &[u8], width: u32, height: u32) -> PyResult<Option<String>> {
    if data.len() != 4 * width as usize * height as usize {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "data length does not match width * height * 4",
        ));
    }
    let image = telepen_rs::RasterImage::new(width, height, data.to_vec());
    Ok(telepen_rs::decode_telepen(&image))
}

/// telepen Python module.
#[pymodule]
fn telepen(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_telepen, m)?)?;
    Ok(())
}
