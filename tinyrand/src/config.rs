//! Generator configuration
//!
//! Every supported version maps to one immutable [`GeneratorConfig`]
//! describing its algorithm, bit width and optional decorrelation table.
//! [`RandConfig`] is the user-facing construction config (version + seed)
//! and can be loaded from JSON.

use crate::error::RngError;
use crate::rng::{AlgorithmKind, Generator};
use crate::versions::{self, Version, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};

/// Smallest supported generator width
pub const MIN_BITS: u32 = 16;

/// Largest supported generator width (one machine word)
pub const MAX_BITS: u32 = 32;

/// Largest supported decorrelation table (2^8 slots)
pub const MAX_BD_BITS: u32 = 8;

// ============================================================================
// Generator Configuration
// ============================================================================

/// Immutable per-version generator parameters
///
/// # Example
/// ```
/// use tinyrand::GeneratorConfig;
///
/// let config = GeneratorConfig::for_version(3).unwrap();
/// assert_eq!(config.bits, 16);
/// assert_eq!(config.nstates(), 65536);
/// assert_eq!(config.mask(), 0xffff);
/// assert_eq!(config.table_size(), Some(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Version tag this config belongs to
    pub version: Version,

    /// Raw recurrence
    pub algorithm: AlgorithmKind,

    /// Output width in bits (`BITS`)
    pub bits: u32,

    /// Decorrelation table width (`BD_BITS`), `None` when unwrapped
    pub bd_bits: Option<u32>,
}

impl GeneratorConfig {
    /// Look up the config of a supported version
    ///
    /// # Errors
    /// Returns `UnsupportedVersion` if `version` is not in
    /// [`SUPPORTED_VERSIONS`](crate::SUPPORTED_VERSIONS).
    pub fn for_version(version: Version) -> Result<Self, RngError> {
        versions::config_for(version)
    }

    /// Number of distinct outputs, `2^BITS`
    pub fn nstates(&self) -> u64 {
        1u64 << self.bits
    }

    /// `NSTATES - 1`
    pub fn mask(&self) -> u32 {
        (self.nstates() - 1) as u32
    }

    /// Number of decorrelation table slots, if the version uses one
    pub fn table_size(&self) -> Option<usize> {
        self.bd_bits.map(|bd_bits| 1usize << bd_bits)
    }

    /// Full period of the raw recurrence under this config
    pub fn period(&self) -> u128 {
        self.algorithm.period(self.bits)
    }

    /// Check internal consistency of the parameters
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the width is outside
    /// `MIN_BITS..=MAX_BITS`, if a xorshift variant is not 32 bits wide,
    /// or if the decorrelation table width is outside `1..=MAX_BD_BITS`.
    pub fn validate(&self) -> Result<(), RngError> {
        if !(MIN_BITS..=MAX_BITS).contains(&self.bits) {
            return Err(RngError::InvalidConfig(format!(
                "bits must be in {}..={}, got {}",
                MIN_BITS, MAX_BITS, self.bits
            )));
        }

        if let Some(required) = self.algorithm.required_bits() {
            if self.bits != required {
                return Err(RngError::InvalidConfig(format!(
                    "{:?} requires {} bits, got {}",
                    self.algorithm, required, self.bits
                )));
            }
        }

        if let Some(bd_bits) = self.bd_bits {
            if !(1..=MAX_BD_BITS).contains(&bd_bits) {
                return Err(RngError::InvalidConfig(format!(
                    "bd_bits must be in 1..={}, got {}",
                    MAX_BD_BITS, bd_bits
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Construction Config
// ============================================================================

fn default_version() -> Version {
    DEFAULT_VERSION
}

/// Version + seed pair used to build a generator
///
/// Missing fields fall back to the default version and seed 0.
///
/// # Example
/// ```
/// use tinyrand::{RandConfig, DEFAULT_VERSION};
///
/// let config = RandConfig::from_json(r#"{"seed": 42}"#).unwrap();
/// assert_eq!(config.version, DEFAULT_VERSION);
///
/// let mut rng = config.build().unwrap();
/// let _ = rng.get();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandConfig {
    #[serde(default = "default_version")]
    pub version: Version,

    #[serde(default)]
    pub seed: i64,
}

impl Default for RandConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            seed: 0,
        }
    }
}

impl RandConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this config to JSON
    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Construct the configured generator
    pub fn build(&self) -> Result<Generator, RngError> {
        versions::construct(self.version, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_and_nstates_for_32_bits() {
        let config = GeneratorConfig::for_version(0).unwrap();
        assert_eq!(config.nstates(), 1u64 << 32);
        assert_eq!(config.mask(), u32::MAX);
        assert_eq!(config.table_size(), None);
    }

    #[test]
    fn test_validate_rejects_narrow_xorshift() {
        let config = GeneratorConfig {
            version: 99,
            algorithm: AlgorithmKind::Xorshift32,
            bits: 16,
            bd_bits: None,
        };
        assert!(matches!(config.validate(), Err(RngError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_bits() {
        for bits in [0, 8, 15, 33, 64] {
            let config = GeneratorConfig {
                version: 99,
                algorithm: AlgorithmKind::Lcg,
                bits,
                bd_bits: None,
            };
            assert!(config.validate().is_err(), "bits={} accepted", bits);
        }
    }

    #[test]
    fn test_validate_rejects_bad_table_width() {
        for bd_bits in [0, MAX_BD_BITS + 1] {
            let config = GeneratorConfig {
                version: 99,
                algorithm: AlgorithmKind::Lcg,
                bits: 24,
                bd_bits: Some(bd_bits),
            };
            assert!(config.validate().is_err(), "bd_bits={} accepted", bd_bits);
        }
    }

    #[test]
    fn test_rand_config_defaults() {
        let config = RandConfig::from_json("{}").unwrap();
        assert_eq!(config, RandConfig::default());
    }

    #[test]
    fn test_rand_config_rejects_malformed_json() {
        let err = RandConfig::from_json(r#"{"seed": "abc"}"#).unwrap_err();
        assert!(matches!(err, RngError::Serialization(_)));
    }

    #[test]
    fn test_rand_config_build_unsupported_version() {
        let config = RandConfig {
            version: 666,
            seed: 0,
        };
        assert!(matches!(
            config.build(),
            Err(RngError::UnsupportedVersion { version: 666, .. })
        ));
    }
}
