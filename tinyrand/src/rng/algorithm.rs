//! Raw generator recurrences
//!
//! Three interchangeable algorithms, each a pure bit-manipulation state
//! machine over fixed-width unsigned words:
//!
//! - **LCG**: `state' = (A * state + C) mod 2^BITS`. `A` fits in 17 bits so
//!   the product of a 32-bit state fits in 49 bits. `C` is odd and
//!   `A ≡ 1 (mod 4)`, which gives the full period `2^BITS` for any
//!   power-of-two modulus (Hull–Dobell).
//! - **xorshift32**: Marsaglia's 13/17/5 triple. Zero is an absorbing state
//!   and is never reachable from a nonzero one; period `2^32 - 1`.
//! - **xorshift128**: Marsaglia's four-word generator. Seeded through the
//!   LCG, then warmed up so nearby seeds decorrelate; period `2^128 - 1`.

use serde::{Deserialize, Serialize};

/// LCG multiplier
pub const LCG_MULTIPLIER: u32 = 121_525;

/// LCG increment
pub const LCG_INCREMENT: u32 = 386_076_519;

/// Replacement state when a xorshift32 seed masks to zero
pub const XORSHIFT32_ZERO_FALLBACK: u32 = 1;

/// Outputs discarded after seeding xorshift128
pub const XORSHIFT128_WARMUP: usize = 6;

/// One LCG step at full 32-bit width, masked down to `mask`
#[inline]
pub(crate) fn lcg_step(state: u32, mask: u32) -> u32 {
    LCG_MULTIPLIER
        .wrapping_mul(state)
        .wrapping_add(LCG_INCREMENT)
        & mask
}

/// Raw recurrence selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    Lcg,
    Xorshift32,
    Xorshift128,
}

impl AlgorithmKind {
    /// Width this algorithm is fixed to, if any
    pub fn required_bits(&self) -> Option<u32> {
        match self {
            AlgorithmKind::Lcg => None,
            AlgorithmKind::Xorshift32 | AlgorithmKind::Xorshift128 => Some(32),
        }
    }

    /// Number of raw outputs before the state repeats
    pub fn period(&self, bits: u32) -> u128 {
        match self {
            AlgorithmKind::Lcg => 1u128 << bits,
            AlgorithmKind::Xorshift32 => (1u128 << 32) - 1,
            AlgorithmKind::Xorshift128 => u128::MAX,
        }
    }
}

/// Internal state of a raw generator
///
/// Each variant carries exactly the words its recurrence needs. States are
/// created zeroed by [`RawState::new`] and must be seeded before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawState {
    Lcg { state: u32 },
    Xorshift32 { state: u32 },
    Xorshift128 { state: [u32; 4] },
}

impl RawState {
    /// Unseeded state for `kind`
    pub fn new(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Lcg => RawState::Lcg { state: 0 },
            AlgorithmKind::Xorshift32 => RawState::Xorshift32 {
                state: XORSHIFT32_ZERO_FALLBACK,
            },
            AlgorithmKind::Xorshift128 => RawState::Xorshift128 { state: [0; 4] },
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            RawState::Lcg { .. } => AlgorithmKind::Lcg,
            RawState::Xorshift32 { .. } => AlgorithmKind::Xorshift32,
            RawState::Xorshift128 { .. } => AlgorithmKind::Xorshift128,
        }
    }

    /// Re-initialize from an already masked seed
    pub fn seed(&mut self, seed: u32, mask: u32) {
        match self {
            RawState::Lcg { state } => *state = seed & mask,
            RawState::Xorshift32 { state } => {
                let masked = seed & mask;
                *state = if masked == 0 {
                    XORSHIFT32_ZERO_FALLBACK
                } else {
                    masked
                };
            }
            RawState::Xorshift128 { state } => {
                let mut s = seed & mask;
                for word in state.iter_mut() {
                    s = lcg_step(s, u32::MAX);
                    *word = s;
                }
                for _ in 0..XORSHIFT128_WARMUP {
                    self.next(mask);
                }
            }
        }
    }

    /// Advance one step and return the output in `[0, mask]`
    #[inline]
    pub fn next(&mut self, mask: u32) -> u32 {
        match self {
            RawState::Lcg { state } => {
                *state = lcg_step(*state, mask);
                *state
            }
            RawState::Xorshift32 { state } => {
                let mut x = *state;
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                *state = x;
                x
            }
            RawState::Xorshift128 { state } => {
                let mut t = state[0];
                t ^= t << 11;
                t ^= t >> 8;
                state[0] = state[1];
                state[1] = state[2];
                let mut w = state[3];
                state[2] = w;
                w ^= (w >> 19) ^ t;
                state[3] = w;
                w
            }
        }
    }

    /// True if the state is one the recurrence can never leave or reach
    pub fn is_degenerate(&self) -> bool {
        match self {
            RawState::Lcg { .. } => false,
            RawState::Xorshift32 { state } => *state == 0,
            RawState::Xorshift128 { state } => state.iter().all(|&w| w == 0),
        }
    }
}
