//! Seeded generator combining a raw recurrence with an optional
//! decorrelation stage
//!
//! # Determinism
//!
//! For a fixed version and seed, the outputs of [`Generator::get`],
//! [`Generator::next_raw`] and [`Generator::shuffle`] are a pure function of
//! call order, bit-for-bit identical across processes and machines.

use super::algorithm::RawState;
use super::decorrelate::Decorrelator;
use crate::config::GeneratorConfig;
use crate::error::RngError;
use crate::shuffle::{self, BitSource};
use crate::versions::{self, Version};

/// Reject negative seeds and keep only the low `BITS` bits
fn mask_seed(value: i64, mask: u32) -> Result<u32, RngError> {
    if value < 0 {
        log::warn!("rejected negative seed {}", value);
        return Err(RngError::InvalidSeed(value));
    }
    Ok((value as u64 & u64::from(mask)) as u32)
}

/// Deterministic pseudo-random generator
///
/// Not cryptographically secure. A generator is exclusively owned; share
/// one across threads only behind external synchronization.
///
/// # Example
/// ```
/// use tinyrand::Generator;
///
/// let mut rng = Generator::new(0, 42).unwrap();
/// let first = rng.get();
///
/// rng.seed(42).unwrap();
/// assert_eq!(rng.get(), first);
///
/// let mut letters: Vec<char> = "abcdef".chars().collect();
/// rng.shuffle(&mut letters).unwrap();
/// assert_eq!(letters.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    config: GeneratorConfig,
    raw: RawState,
    decorrelator: Option<Decorrelator>,
}

impl Generator {
    /// Construct a generator of a supported version
    ///
    /// Equivalent to [`construct`](crate::construct).
    pub fn new(version: Version, seed: i64) -> Result<Self, RngError> {
        versions::construct(version, seed)
    }

    pub(crate) fn from_config(config: GeneratorConfig, seed: i64) -> Result<Self, RngError> {
        config.validate()?;
        let (raw, decorrelator) = Self::seeded_state(&config, seed)?;
        log::debug!(
            "constructed generator version={} algorithm={:?} bits={} bd_bits={:?}",
            config.version,
            config.algorithm,
            config.bits,
            config.bd_bits
        );
        Ok(Self {
            config,
            raw,
            decorrelator,
        })
    }

    /// Reassemble a generator from checkpointed parts
    ///
    /// Callers are responsible for checking the parts against `config`.
    pub(crate) fn from_parts(
        config: GeneratorConfig,
        raw: RawState,
        decorrelator: Option<Decorrelator>,
    ) -> Self {
        Self {
            config,
            raw,
            decorrelator,
        }
    }

    fn seeded_state(
        config: &GeneratorConfig,
        seed: i64,
    ) -> Result<(RawState, Option<Decorrelator>), RngError> {
        let mask = config.mask();
        let seed = mask_seed(seed, mask)?;

        let mut raw = RawState::new(config.algorithm);
        raw.seed(seed, mask);
        let decorrelator = config
            .bd_bits
            .map(|bd_bits| Decorrelator::prime(&mut raw, mask, bd_bits));

        Ok((raw, decorrelator))
    }

    /// Re-initialize the generator from `value`
    ///
    /// Bits above `BITS` are discarded, so `seed(s)` and
    /// `seed(s + k * NSTATES)` produce the same stream.
    ///
    /// # Errors
    /// Returns `InvalidSeed` for negative values; the generator is left
    /// untouched in that case.
    pub fn seed(&mut self, value: i64) -> Result<(), RngError> {
        let (raw, decorrelator) = Self::seeded_state(&self.config, value)?;
        self.raw = raw;
        self.decorrelator = decorrelator;
        log::debug!("reseeded generator version={} seed={}", self.config.version, value);
        Ok(())
    }

    /// One undecorated step of the raw recurrence, in `[0, NSTATES)`
    ///
    /// Exposed for statistical testing of the raw stream. Downstream
    /// consumers should use [`Generator::get`].
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.raw.next(self.config.mask())
    }

    /// Next public output, in `[0, NSTATES)`
    ///
    /// Passes through the decorrelation table when the version has one,
    /// otherwise identical to [`Generator::next_raw`].
    #[inline]
    pub fn get(&mut self) -> u32 {
        let mask = self.config.mask();
        match self.decorrelator.as_mut() {
            Some(bd) => bd.next(&mut self.raw, mask),
            None => self.raw.next(mask),
        }
    }

    /// Permute `seq` in place, uniformly at random
    ///
    /// # Errors
    /// Returns `SequenceTooLong` if `seq.len() > NSTATES`; `seq` is left
    /// untouched in that case.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) -> Result<(), RngError> {
        shuffle::shuffle(seq, self)
    }

    pub fn version(&self) -> Version {
        self.config.version
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `BITS`
    pub fn bits(&self) -> u32 {
        self.config.bits
    }

    /// `NSTATES = 2^BITS`
    pub fn nstates(&self) -> u64 {
        self.config.nstates()
    }

    /// `MASK = NSTATES - 1`
    pub fn mask(&self) -> u32 {
        self.config.mask()
    }

    /// Full period of the raw recurrence
    pub fn period(&self) -> u128 {
        self.config.period()
    }

    pub fn is_decorrelated(&self) -> bool {
        self.decorrelator.is_some()
    }

    pub(crate) fn raw_state(&self) -> &RawState {
        &self.raw
    }

    pub(crate) fn decorrelator(&self) -> Option<&Decorrelator> {
        self.decorrelator.as_ref()
    }
}

impl BitSource for Generator {
    fn bits(&self) -> u32 {
        self.config.bits
    }

    fn next_word(&mut self) -> u32 {
        self.get()
    }
}
