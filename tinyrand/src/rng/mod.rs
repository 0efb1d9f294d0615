//! Deterministic random number generation
//!
//! A closed family of raw recurrences (LCG, xorshift32, xorshift128), an
//! optional Bays–Durham decorrelation stage, and the [`Generator`] that
//! ties them to a version's configuration.

mod algorithm;
mod decorrelate;
mod generator;

pub use algorithm::{
    AlgorithmKind, RawState, LCG_INCREMENT, LCG_MULTIPLIER, XORSHIFT128_WARMUP,
    XORSHIFT32_ZERO_FALLBACK,
};
pub use decorrelate::Decorrelator;
pub use generator::Generator;
