#![warn(missing_docs)]
//! Python-exported functions for de/compression of bytes in the Snappy block
//! format.
//!
//! Although this documentation is built using the Cargo/Rust toolchain, the
//! examples and API represent the usable _Python_ API.
//!
//! The module mirrors the classic Snappy capability set: `compress`,
//! `uncompress`, `is_valid_compressed`, `max_compressed_length` and
//! `get_uncompressed_length`, all over plain `bytes`. The codec itself lives
//! in the `libsnappy` crate; this crate only marshals arguments, translates
//! errors and registers the module.
//!
//! ### Simple Python Example:
//!
//! ```python
//! >>> data = b'some bytes here'
//! >>> compressed = snappy.compress(data)
//! >>> snappy.is_valid_compressed(compressed)
//! True
//! >>> snappy.get_uncompressed_length(compressed)
//! 15
//! >>> bytes(snappy.uncompress(compressed)) == data
//! True
//! ```

mod exceptions;

use exceptions::{CompressionError, DecompressionError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use pyo3::wrap_pyfunction;

/// Snappy compression.
///
/// Succeeds for any `bytes` input below the format's 2^32 - 1 byte ceiling,
/// the empty buffer included.
///
/// Python Example
/// --------------
/// ```python
/// >>> snappy.compress(b'some bytes here')
/// ```
#[pyfunction]
pub fn compress<'py>(py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    let output = py
        .allow_threads(|| libsnappy::raw::compress_vec(data))
        .map_err(CompressionError::from_err)?;
    Ok(PyBytes::new(py, &output))
}

/// Snappy decompression.
///
/// Raises `DecompressionError` if `data` is not a well-formed compressed
/// block; malformed input never yields partial output.
///
/// Python Example
/// --------------
/// ```python
/// >>> snappy.uncompress(compressed_bytes)
/// ```
#[pyfunction]
pub fn uncompress<'py>(py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    let output = py
        .allow_threads(|| libsnappy::raw::decompress_vec(data))
        .map_err(DecompressionError::from_err)?;
    Ok(PyBytes::new(py, &output))
}

/// Report whether `data` is a structurally valid compressed block.
///
/// Always returns a bool, never raises.
///
/// Python Example
/// --------------
/// ```python
/// >>> snappy.is_valid_compressed(maybe_compressed_bytes)
/// ```
#[pyfunction]
pub fn is_valid_compressed(py: Python, data: &[u8]) -> bool {
    py.allow_threads(|| libsnappy::raw::validate(data))
}

/// Worst-case compressed size for `size` uncompressed bytes, independent of
/// their content.
///
/// Python Example
/// --------------
/// ```python
/// >>> snappy.max_compressed_length(len(data))
/// ```
#[pyfunction]
pub fn max_compressed_length(size: usize) -> usize {
    libsnappy::raw::max_compress_len(size)
}

/// Read the uncompressed length from a compressed block's header without
/// decompressing it.
///
/// Raises `DecompressionError` if the header cannot be parsed.
///
/// Python Example
/// --------------
/// ```python
/// >>> snappy.get_uncompressed_length(compressed_bytes)
/// ```
#[pyfunction]
pub fn get_uncompressed_length(py: Python, data: &[u8]) -> PyResult<usize> {
    py.allow_threads(|| libsnappy::raw::decompress_len(data))
        .map_err(DecompressionError::from_err)
}

#[pymodule]
fn snappy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("CompressionError", m.py().get_type::<CompressionError>())?;
    m.add("DecompressionError", m.py().get_type::<DecompressionError>())?;
    m.add_function(wrap_pyfunction!(compress, m)?)?;
    m.add_function(wrap_pyfunction!(uncompress, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_compressed, m)?)?;
    m.add_function(wrap_pyfunction!(max_compressed_length, m)?)?;
    m.add_function(wrap_pyfunction!(get_uncompressed_length, m)?)?;
    Ok(())
}
