//! Error type shared by every fallible tinyrand operation
//!
//! All errors are detected synchronously at the offending call. None of
//! them leave a generator half-seeded or a sequence half-permuted.

use crate::versions::Version;
use thiserror::Error;

/// Errors reported by generator construction, seeding, shuffling and
/// checkpoint restore
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("seed must be >= 0, got {0}")]
    InvalidSeed(i64),

    #[error("invalid version {version}, must be in {supported:?}")]
    UnsupportedVersion {
        version: Version,
        supported: &'static [Version],
    },

    #[error("list too long: length {len} exceeds {capacity} generator states")]
    SequenceTooLong { len: usize, capacity: u64 },

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("snapshot mismatch: {0}")]
    SnapshotMismatch(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Serialization(err.to_string())
    }
}
