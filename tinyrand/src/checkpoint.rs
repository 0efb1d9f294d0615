//! Checkpoint - Save/Load Generator State
//!
//! Captures the complete state of a [`Generator`] so a stream can be paused
//! and resumed exactly where it left off, possibly in another process.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues with exactly the
//!   outputs the original would have produced
//! - **Config Matching**: a snapshot only restores under a version whose
//!   config hashes to the recorded value
//! - **State Shape**: the raw state variant, word widths and table size
//!   must agree with that config

use crate::config::GeneratorConfig;
use crate::error::RngError;
use crate::rng::{Decorrelator, Generator, RawState};
use crate::versions::Version;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Version the generator was constructed with
    pub version: Version,

    /// SHA256 hash of the version's config (for validation)
    pub config_hash: String,

    /// Raw recurrence state
    pub raw: RawState,

    /// Decorrelation table and current register, if the version has one
    pub decorrelator: Option<Decorrelator>,
}

impl GeneratorSnapshot {
    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a generator config
///
/// The struct serializes with fields in declaration order, so the JSON
/// text (and therefore the hash) is stable.
pub fn compute_config_hash(config: &GeneratorConfig) -> Result<String, RngError> {
    let json = serde_json::to_string(config)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA256 hex digest of the next `count` outputs of `generator`
///
/// Each output is hashed as a big-endian 32-bit word. Two machines agree
/// on the digest iff they agree on every output.
///
/// # Example
/// ```
/// use tinyrand::{construct, stream_digest};
///
/// let mut a = construct(5, 7).unwrap();
/// let mut b = construct(5, 7).unwrap();
/// assert_eq!(stream_digest(&mut a, 1000), stream_digest(&mut b, 1000));
/// ```
pub fn stream_digest(generator: &mut Generator, count: usize) -> String {
    let mut hasher = Sha256::new();
    for _ in 0..count {
        hasher.update(generator.get().to_be_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Save / Restore
// ============================================================================

impl Generator {
    /// Capture the full generator state
    pub fn snapshot(&self) -> Result<GeneratorSnapshot, RngError> {
        Ok(GeneratorSnapshot {
            version: self.version(),
            config_hash: compute_config_hash(self.config())?,
            raw: self.raw_state().clone(),
            decorrelator: self.decorrelator().cloned(),
        })
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// - `UnsupportedVersion` if the snapshot's version is unknown
    /// - `SnapshotMismatch` if the config hash or state shape disagrees
    ///   with the version's config
    pub fn restore(snapshot: GeneratorSnapshot) -> Result<Self, RngError> {
        let config = GeneratorConfig::for_version(snapshot.version)?;
        validate_snapshot(&snapshot, &config)?;

        log::debug!("restored generator version={} from snapshot", snapshot.version);
        Ok(Generator::from_parts(
            config,
            snapshot.raw,
            snapshot.decorrelator,
        ))
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate a snapshot against the config it claims to belong to
///
/// Checks:
/// - Config hash
/// - Raw state variant and word range
/// - Decorrelation table presence and size
pub fn validate_snapshot(
    snapshot: &GeneratorSnapshot,
    config: &GeneratorConfig,
) -> Result<(), RngError> {
    // 1. Config hash
    let expected_hash = compute_config_hash(config)?;
    if snapshot.config_hash != expected_hash {
        return Err(RngError::SnapshotMismatch(format!(
            "config hash mismatch for version {}: expected {}, got {}",
            config.version, expected_hash, snapshot.config_hash
        )));
    }

    // 2. Raw state shape
    if snapshot.raw.kind() != config.algorithm {
        return Err(RngError::SnapshotMismatch(format!(
            "raw state is {:?}, version {} uses {:?}",
            snapshot.raw.kind(),
            config.version,
            config.algorithm
        )));
    }
    if let RawState::Lcg { state } = snapshot.raw {
        if state & !config.mask() != 0 {
            return Err(RngError::SnapshotMismatch(format!(
                "LCG state {} exceeds {} bits",
                state, config.bits
            )));
        }
    }
    if snapshot.raw.is_degenerate() {
        return Err(RngError::SnapshotMismatch(
            "raw state is the all-zero fixed point".to_string(),
        ));
    }

    // 3. Decorrelation table
    match (&snapshot.decorrelator, config.table_size()) {
        (None, None) => Ok(()),
        (Some(bd), Some(size)) if bd.is_consistent_with(config.mask(), size) => Ok(()),
        (Some(bd), Some(size)) => Err(RngError::SnapshotMismatch(format!(
            "decorrelation table of {} entries does not fit {} slots of {} bits",
            bd.table_len(),
            size,
            config.bits
        ))),
        (Some(_), None) => Err(RngError::SnapshotMismatch(format!(
            "version {} has no decorrelation table",
            config.version
        ))),
        (None, Some(_)) => Err(RngError::SnapshotMismatch(format!(
            "version {} requires a decorrelation table",
            config.version
        ))),
    }
}
