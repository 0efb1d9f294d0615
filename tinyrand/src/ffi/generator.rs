//! PyO3 wrapper for Generator
//!
//! # Example (from Python)
//!
//! ```python
//! import tinyrand
//!
//! t = tinyrand.get(0, 42)
//! letters = list("abcdefghijklmnopqrstuvwxyz")
//! t.shuffle(letters)
//! print("".join(letters))  # yojnpldsihgubxteczkqrfmwva
//! ```

use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::rng::Generator;
use crate::versions::{self, Version, DEFAULT_VERSION};

/// Python wrapper for a Rust generator
#[pyclass(name = "TinyRand")]
pub struct PyTinyRand {
    inner: Generator,
}

#[pymethods]
impl PyTinyRand {
    /// Re-seed the generator
    ///
    /// Raises ValueError for negative seeds.
    fn seed(&mut self, seed: i64) -> PyResult<()> {
        Ok(self.inner.seed(seed)?)
    }

    /// Next public (decorrelated) output
    fn get(&mut self) -> u32 {
        self.inner.get()
    }

    /// Next raw output, bypassing the decorrelation table
    fn _get(&mut self) -> u32 {
        self.inner.next_raw()
    }

    /// Permute a list in place
    ///
    /// Raises ValueError if the list is longer than NSTATES; the list is
    /// left unchanged in that case.
    fn shuffle(&mut self, list: &Bound<'_, PyList>) -> PyResult<()> {
        let mut items: Vec<Bound<'_, PyAny>> = list.iter().collect();
        self.inner.shuffle(&mut items)?;
        for (i, item) in items.into_iter().enumerate() {
            list.set_item(i, item)?;
        }
        Ok(())
    }

    #[getter(VERSION)]
    fn version(&self) -> Version {
        self.inner.version()
    }

    #[getter(BITS)]
    fn bits(&self) -> u32 {
        self.inner.bits()
    }

    #[getter(NSTATES)]
    fn nstates(&self) -> u64 {
        self.inner.nstates()
    }

    #[getter(MASK)]
    fn mask(&self) -> u32 {
        self.inner.mask()
    }

    fn __repr__(&self) -> String {
        format!("TinyRand(version={})", self.inner.version())
    }
}

/// Construct a generator
///
/// Raises ValueError for an unsupported version or a negative seed.
#[pyfunction]
#[pyo3(signature = (version = DEFAULT_VERSION, seed = 0))]
pub fn get(version: Version, seed: i64) -> PyResult<PyTinyRand> {
    let inner = versions::construct(version, seed)?;
    Ok(PyTinyRand { inner })
}
