//! Exceptions raised into Python from de/compression failures
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::PyErr;
use std::fmt::Display;

create_exception!(snappy, CompressionError, PyException);
create_exception!(snappy, DecompressionError, PyException);

impl CompressionError {
    pub(crate) fn from_err<E: Display>(err: E) -> PyErr {
        Self::new_err(err.to_string())
    }
}

impl DecompressionError {
    pub(crate) fn from_err<E: Display>(err: E) -> PyErr {
        Self::new_err(err.to_string())
    }
}
