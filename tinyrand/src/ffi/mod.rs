//! Python bindings
//!
//! Thin PyO3 surface over the generator. No logic lives here beyond type
//! conversion and error mapping.

pub mod generator;

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use crate::error::RngError;

impl From<RngError> for PyErr {
    fn from(err: RngError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
