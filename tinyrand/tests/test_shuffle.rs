//! Shuffle tests
//!
//! Critical invariants tested:
//! - Canned permutations are reproduced byte for byte
//! - Output is always a permutation of the input positions
//! - Length guard: NSTATES accepted, NSTATES + 1 rejected without mutation

use proptest::prelude::*;
use tinyrand::{construct, shuffle, BitSource, Generator, RngError, DEFAULT_VERSION, SUPPORTED_VERSIONS};

const SEED: i64 = 42;

const CANNED_SHUFFLES: [&str; 10] = [
    "yojnpldsihgubxteczkqrfmwva",
    "ivdleyxqpkhfmbcszwrugtjnao",
    "utcmjevqlxwyazbsdknpohfirg",
    "rsbxdtcmepiqflyhzognjkvuwa",
    "vcmgphafiznqxlejuktdsorwby",
    "pelsocnbhativxrfkwdjugmqzy",
    "hukoawzxjtbmdipgfrelcynqvs",
    "yiltkvxpfmcuoghjazqerdbwns",
    "gkniojhfsamturzxwebycqvpdl",
    "tfdykvzomnbuhplgcisejxqraw",
];

#[test]
fn test_canned_shuffles_repeatable() {
    let letters: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
    assert_eq!(letters.len(), 26);

    let mut rng = construct(0, SEED).unwrap();
    for _trial in 0..2 {
        rng.seed(SEED).unwrap();
        let got: Vec<String> = (0..CANNED_SHUFFLES.len())
            .map(|_| {
                let mut xs = letters.clone();
                rng.shuffle(&mut xs).unwrap();
                xs.into_iter().collect()
            })
            .collect();
        assert_eq!(got, CANNED_SHUFFLES);
    }
}

#[test]
fn test_free_function_matches_method() {
    let mut a = construct(5, 11).unwrap();
    let mut b = construct(5, 11).unwrap();
    let mut xs: Vec<u32> = (0..500).collect();
    let mut ys = xs.clone();

    a.shuffle(&mut xs).unwrap();
    shuffle(&mut ys, &mut b).unwrap();
    assert_eq!(xs, ys);
}

#[test]
fn test_empty_and_single_element() {
    for &version in SUPPORTED_VERSIONS {
        let mut rng = construct(version, 1).unwrap();
        let mut reference = construct(version, 1).unwrap();

        let mut empty: Vec<u8> = Vec::new();
        rng.shuffle(&mut empty).unwrap();
        let mut one = vec!["x"];
        rng.shuffle(&mut one).unwrap();
        assert_eq!(one, vec!["x"]);

        // Nothing was drawn
        assert_eq!(rng.get(), reference.get());
    }
}

#[test]
fn test_length_guard_at_nstates_boundary() {
    // Version 3 is 16 bits wide: NSTATES = 65536
    let mut rng = construct(3, SEED).unwrap();
    let nstates = rng.nstates() as usize;
    assert_eq!(nstates, 65536);

    let mut fits: Vec<u32> = (0..nstates as u32).collect();
    rng.shuffle(&mut fits).unwrap();
    let mut sorted = fits.clone();
    sorted.sort_unstable();
    assert!(sorted.iter().enumerate().all(|(i, &v)| i as u32 == v));

    let mut too_long: Vec<u32> = (0..=nstates as u32).collect();
    let untouched = too_long.clone();
    let err = rng.shuffle(&mut too_long).unwrap_err();
    assert_eq!(
        err,
        RngError::SequenceTooLong {
            len: nstates + 1,
            capacity: 65536,
        }
    );
    assert_eq!(too_long, untouched);
}

#[test]
fn test_too_long_does_not_consume_draws() {
    let mut rng = construct(3, 5).unwrap();
    let mut reference = construct(3, 5).unwrap();

    let mut too_long = vec![0u8; 65537];
    assert!(rng.shuffle(&mut too_long).is_err());
    for _ in 0..10 {
        assert_eq!(rng.get(), reference.get());
    }
}

#[test]
fn test_duplicates_are_shuffled_positionally() {
    let mut rng = construct(DEFAULT_VERSION, 3).unwrap();
    let mut xs: Vec<(char, usize)> = "aabbbc".chars().enumerate().map(|(i, c)| (c, i)).collect();
    rng.shuffle(&mut xs).unwrap();

    let mut positions: Vec<usize> = xs.iter().map(|&(_, i)| i).collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

    let mut values: Vec<char> = xs.iter().map(|&(c, _)| c).collect();
    values.sort_unstable();
    assert_eq!(values, vec!['a', 'a', 'b', 'b', 'b', 'c']);
}

#[test]
fn test_shuffle_consumes_variable_draws() {
    // Counts draws through a wrapping bit source
    struct Counting<'a> {
        inner: &'a mut Generator,
        draws: usize,
    }

    impl BitSource for Counting<'_> {
        fn bits(&self) -> u32 {
            self.inner.bits()
        }

        fn next_word(&mut self) -> u32 {
            self.draws += 1;
            self.inner.get()
        }
    }

    let mut rng = construct(0, SEED).unwrap();
    let mut counts = Vec::new();
    for _ in 0..20 {
        let mut source = Counting {
            inner: &mut rng,
            draws: 0,
        };
        let mut xs: Vec<u32> = (0..100).collect();
        shuffle(&mut xs, &mut source).unwrap();
        assert!(source.draws >= 99);
        counts.push(source.draws);
    }
    counts.sort_unstable();
    counts.dedup();
    assert!(counts.len() > 1, "draw count should depend on the stream");
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(
        version_idx in 0..SUPPORTED_VERSIONS.len(),
        seed in 0i64..i64::MAX,
        n in 0usize..300,
    ) {
        let mut rng = construct(SUPPORTED_VERSIONS[version_idx], seed).unwrap();
        let mut xs: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut xs).unwrap();

        xs.sort_unstable();
        prop_assert_eq!(xs, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_shuffle_deterministic(
        version_idx in 0..SUPPORTED_VERSIONS.len(),
        seed in 0i64..i64::MAX,
        n in 0usize..100,
    ) {
        let version = SUPPORTED_VERSIONS[version_idx];
        let mut a = construct(version, seed).unwrap();
        let mut b = construct(version, seed).unwrap();
        let mut xs: Vec<usize> = (0..n).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs).unwrap();
        b.shuffle(&mut ys).unwrap();
        prop_assert_eq!(xs, ys);
    }
}
