//! Unbiased forward Fisher–Yates shuffle
//!
//! The prefix `seq[..j]` is always a uniformly random permutation of the
//! original elements at those positions. Each step extends it by swapping
//! `seq[j]` with a uniformly chosen index in `[0, j]`.
//!
//! Uniform indices come from rejection sampling on the top `b` bits of a
//! word, where `b` is the smallest width covering `j`. Since `j` is always
//! at least half of `2^b - 1`, each step needs fewer than two draws on
//! average. Top bits are used because they are the better-quality bits of
//! every supported generator. The forward direction lets `b` grow by one
//! each time `j` reaches a power of two, so no bit-length computation is
//! needed.

use crate::error::RngError;

/// A source of uniform random words `bits()` wide
pub trait BitSource {
    /// Width of each word, at most 32
    fn bits(&self) -> u32;

    /// Next uniform word in `[0, 2^bits())`
    fn next_word(&mut self) -> u32;

    /// Number of distinct words, `2^bits()`
    fn nstates(&self) -> u64 {
        1u64 << self.bits()
    }
}

/// Permute `seq` in place using words drawn from `source`
///
/// Sequences up to and including `source.nstates()` elements are accepted.
/// The number of words consumed depends on the draws themselves.
///
/// # Errors
/// Returns `SequenceTooLong` if `seq.len() > source.nstates()`. Nothing is
/// drawn and `seq` is unchanged in that case.
///
/// # Example
/// ```
/// use tinyrand::{construct, shuffle};
///
/// let mut rng = construct(0, 42).unwrap();
/// let mut letters: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
/// shuffle(&mut letters, &mut rng).unwrap();
///
/// let s: String = letters.into_iter().collect();
/// assert_eq!(s, "yojnpldsihgubxteczkqrfmwva");
/// ```
pub fn shuffle<T, S>(seq: &mut [T], source: &mut S) -> Result<(), RngError>
where
    S: BitSource + ?Sized,
{
    let len = seq.len();
    let capacity = source.nstates();
    if len as u64 > capacity {
        log::warn!("refusing to shuffle {} elements with {} states", len, capacity);
        return Err(RngError::SequenceTooLong { len, capacity });
    }

    let mut shift = source.bits().saturating_sub(1);
    let mut hi = 2usize;
    for j in 1..len {
        if j == hi {
            hi <<= 1;
            shift -= 1;
        }
        let i = loop {
            let i = (source.next_word() >> shift) as usize;
            if i <= j {
                break i;
            }
        };
        seq.swap(i, j);
    }

    Ok(())
}
