//! tinyrand - Deterministic PRNG and unbiased shuffling
//!
//! Small, non-cryptographic generators whose output streams are fixed
//! forever per (version, seed), plus an unbiased in-place shuffle built on
//! top of them.
//!
//! # Architecture
//!
//! - **rng**: Raw recurrences, Bays–Durham decorrelation, `Generator`
//! - **shuffle**: Forward Fisher–Yates with rejection sampling
//! - **versions**: Supported versions and construction
//! - **config**: Per-version parameters and JSON construction config
//! - **checkpoint**: Snapshot/restore and stream digests
//!
//! # Critical Invariants
//!
//! 1. Same version + seed → same outputs, bit for bit, on every machine
//! 2. Seeds are masked to `BITS`; negative seeds are rejected
//! 3. Failed calls never leave partial state behind

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;
pub mod versions;

// Re-exports for convenience
pub use checkpoint::{compute_config_hash, stream_digest, GeneratorSnapshot};
pub use config::{GeneratorConfig, RandConfig};
pub use error::RngError;
pub use rng::{AlgorithmKind, Generator};
pub use shuffle::{shuffle, BitSource};
pub use versions::{construct, construct_default, Version, DEFAULT_VERSION, SUPPORTED_VERSIONS};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn tinyrand(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyTinyRand>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::get, m)?)?;
    m.add("SUPPORTED_VERSIONS", SUPPORTED_VERSIONS.to_vec())?;
    m.add("DEFAULT_VERSION", DEFAULT_VERSION)?;
    Ok(())
}
