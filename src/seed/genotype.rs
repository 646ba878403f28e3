//! Bounded printable-string genotype with a cached Java-style hash.

use crate::error::{EvolveError, Result};
use crate::evolve::Genotype;
use rand::Rng;
use std::fmt;

/// Default capacity: strings hold at most `CAP - 1` characters.
pub const DEFAULT_CAPACITY: usize = 40;

/// Java `String.hashCode` over bytes: `Σ s[i] · 31^(n-1-i)` with 32-bit
/// wraparound.
///
/// ```
/// use u_evolve::seed::java_hash;
///
/// assert_eq!(java_hash(b"A"), 65);
/// assert_eq!(java_hash(b"hello"), 99_162_322);
/// ```
pub fn java_hash(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0i32, |hash, &b| hash.wrapping_mul(31).wrapping_add(i32::from(b)))
}

/// Printable in the C locale: space through tilde.
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// Draws from `0..0xff` until the byte is printable.
pub fn random_printable<R: Rng>(rng: &mut R) -> u8 {
    loop {
        let b: u8 = rng.random_range(0..0xff);
        if is_printable(b) {
            return b;
        }
    }
}

/// Flips one random bit of `c` until the result is printable.
///
/// The bit index is a random byte divided by 32, i.e. a uniform draw from
/// `0..=7`.
pub fn flip_until_printable<R: Rng>(c: u8, rng: &mut R) -> u8 {
    loop {
        let bit = rng.random::<u8>() / 32;
        let out = c ^ (1 << bit);
        if is_printable(out) {
            return out;
        }
    }
}

/// A printable ASCII string of length `1..=CAP - 1` plus its cached hash.
///
/// The hash is recomputed whenever a new value is built, so it is never
/// stale. Clones copy the buffer by value.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedGenotype<const CAP: usize = DEFAULT_CAPACITY> {
    bytes: Vec<u8>,
    hash: i32,
}

impl<const CAP: usize> SeedGenotype<CAP> {
    /// Longest string this genotype can hold.
    pub const MAX_LEN: usize = CAP - 1;

    /// Builds a genotype from caller-supplied bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(EvolveError::InvalidGenotype("value must not be empty".into()));
        }
        if bytes.len() > Self::MAX_LEN {
            return Err(EvolveError::InvalidGenotype(format!(
                "value length {} exceeds {}",
                bytes.len(),
                Self::MAX_LEN
            )));
        }
        if let Some(pos) = bytes.iter().position(|&b| !is_printable(b)) {
            return Err(EvolveError::InvalidGenotype(format!(
                "non-printable byte {:#04x} at {pos}",
                bytes[pos]
            )));
        }
        Ok(Self::from_vec(bytes.to_vec()))
    }

    /// Wraps an already valid buffer and caches its hash.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty() && bytes.len() <= Self::MAX_LEN);
        debug_assert!(bytes.iter().all(|&b| is_printable(b)));
        let hash = java_hash(&bytes);
        Self { bytes, hash }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).expect("printable ASCII is valid UTF-8")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The cached hash of the current value.
    pub fn hash_code(&self) -> i32 {
        self.hash
    }
}

impl<const CAP: usize> Genotype for SeedGenotype<CAP> {
    type Target = i32;

    fn random<R: Rng>(rng: &mut R) -> Self {
        assert!(CAP >= 2, "capacity must leave room for one character");
        let len = rng.random_range(1..=Self::MAX_LEN);
        let bytes = (0..len).map(|_| random_printable(rng)).collect();
        Self::from_vec(bytes)
    }

    /// Each character is kept or bit-flipped with probability 1/2. Then,
    /// with probability 1/2, the length is adjusted: half the time extended
    /// by `1..=MAX_LEN - n` random characters (if not already full),
    /// otherwise truncated to `1..n` (if longer than one).
    fn mutate_from<R: Rng>(parent: &Self, rng: &mut R) -> Self {
        let n = parent.bytes.len();
        let mut bytes = Vec::with_capacity(Self::MAX_LEN);

        for &c in &parent.bytes {
            if rng.random_bool(0.5) {
                bytes.push(flip_until_printable(c, rng));
            } else {
                bytes.push(c);
            }
        }

        if rng.random_bool(0.5) {
            let extend = rng.random_bool(0.5);
            if extend && n < Self::MAX_LEN {
                let extra = rng.random_range(1..=Self::MAX_LEN - n);
                bytes.extend((0..extra).map(|_| random_printable(rng)));
            } else if !extend && n > 1 {
                let new_len = rng.random_range(1..n);
                bytes.truncate(new_len);
            }
        }

        Self::from_vec(bytes)
    }

    /// `|hash - target|`, computed in 64 bits so it never overflows.
    fn fitness_distance(&self, target: i32) -> u64 {
        (i64::from(self.hash) - i64::from(target)).unsigned_abs()
    }
}

impl<const CAP: usize> fmt::Display for SeedGenotype<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const CAP: usize> fmt::Debug for SeedGenotype<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedGenotype")
            .field("value", &self.as_str())
            .field("hash", &self.hash)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Seed = SeedGenotype;

    /// Reference formula with explicit powers of 31.
    fn hash_by_powers(s: &[u8]) -> i32 {
        let n = s.len();
        let mut hash = 0i32;
        for (i, &b) in s.iter().enumerate() {
            let mut pow = 1i32;
            for _ in 0..(n - 1 - i) {
                pow = pow.wrapping_mul(31);
            }
            hash = hash.wrapping_add(i32::from(b).wrapping_mul(pow));
        }
        hash
    }

    fn assert_valid<const CAP: usize>(g: &SeedGenotype<CAP>) {
        assert!(!g.is_empty());
        assert!(g.len() < CAP, "length {} over {}", g.len(), CAP - 1);
        assert!(g.as_bytes().iter().all(|&b| is_printable(b)), "{g:?}");
        assert_eq!(g.hash_code(), java_hash(g.as_bytes()), "stale hash");
    }

    // ---- Hash ----

    #[test]
    fn test_single_char_hash_is_ascii_code() {
        assert_eq!(java_hash(b"A"), 65);
        assert_eq!(Seed::from_bytes(b"A").unwrap().hash_code(), 65);
    }

    #[test]
    fn test_known_hashes() {
        assert_eq!(java_hash(b"Aa"), 2112);
        assert_eq!(java_hash(b"BB"), 2112);
        assert_eq!(java_hash(b"hello"), 99_162_322);
        // Wraps past i32::MAX.
        assert_eq!(java_hash(b"hello world"), 1_794_106_052);
        assert_eq!(java_hash(b"The quick brown fox"), hash_by_powers(b"The quick brown fox"));
    }

    #[test]
    fn test_empty_hash_is_zero() {
        assert_eq!(java_hash(b""), 0);
    }

    // ---- Fitness ----

    #[test]
    fn test_fitness_distance() {
        let g = Seed::from_bytes(b"A").unwrap();
        assert_eq!(g.fitness_distance(65), 0);
        assert_eq!(g.fitness_distance(60), 5);
        assert_eq!(g.fitness_distance(70), 5);
    }

    #[test]
    fn test_fitness_distance_does_not_overflow() {
        let g = Seed::from_bytes(b"A").unwrap();
        assert_eq!(g.fitness_distance(i32::MIN), 65 + 2_147_483_648);
    }

    // ---- Construction ----

    #[test]
    fn test_from_bytes_rejects_invalid() {
        assert!(Seed::from_bytes(b"").is_err());
        assert!(Seed::from_bytes(&[b'a'; 40]).is_err());
        assert!(Seed::from_bytes(b"ab\ncd").is_err());
        assert!(Seed::from_bytes(&[b'a'; 39]).is_ok());
    }

    #[test]
    fn test_display_and_debug() {
        let g = Seed::from_bytes(b"Aa").unwrap();
        assert_eq!(g.to_string(), "Aa");
        assert_eq!(format!("{g:?}"), "SeedGenotype { value: \"Aa\", hash: 2112 }");
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = Seed::random(&mut StdRng::seed_from_u64(42));
        let b = Seed::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_respects_invariants() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            assert_valid(&Seed::random(&mut rng));
        }
    }

    // ---- Sampling ----

    #[test]
    fn test_random_printable_terminates() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10_000 {
            assert!(is_printable(random_printable(&mut rng)));
        }
    }

    #[test]
    fn test_every_printable_char_can_be_flipped() {
        let mut rng = StdRng::seed_from_u64(5);
        for c in 0x20u8..=0x7e {
            for _ in 0..20 {
                let out = flip_until_printable(c, &mut rng);
                assert!(is_printable(out));
                assert_eq!((c ^ out).count_ones(), 1);
            }
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_at_boundaries() {
        let mut rng = StdRng::seed_from_u64(8);
        let shortest = Seed::from_bytes(b"~").unwrap();
        let longest = Seed::from_bytes(&[b' '; 39]).unwrap();
        for _ in 0..1_000 {
            assert_valid(&Seed::mutate_from(&shortest, &mut rng));
            assert_valid(&Seed::mutate_from(&longest, &mut rng));
        }
    }

    #[test]
    fn test_mutation_changes_length_sometimes() {
        let mut rng = StdRng::seed_from_u64(8);
        let parent = Seed::from_bytes(b"abcdefghij").unwrap();
        let lens: Vec<usize> = (0..200)
            .map(|_| Seed::mutate_from(&parent, &mut rng).len())
            .collect();
        assert!(lens.iter().any(|&l| l < 10));
        assert!(lens.iter().any(|&l| l > 10));
        assert!(lens.contains(&10));
    }

    #[test]
    fn test_small_capacity() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut g = SeedGenotype::<4>::random(&mut rng);
        for _ in 0..1_000 {
            g = SeedGenotype::<4>::mutate_from(&g, &mut rng);
            assert_valid(&g);
        }
    }

    proptest! {
        #[test]
        fn prop_mutation_preserves_invariants(
            value in proptest::collection::vec(0x20u8..=0x7e, 1..=39),
            seed in any::<u64>(),
        ) {
            let parent = Seed::from_bytes(&value).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let child = Seed::mutate_from(&parent, &mut rng);
            prop_assert!(!child.is_empty() && child.len() <= 39);
            prop_assert!(child.as_bytes().iter().all(|&b| is_printable(b)));
            prop_assert_eq!(child.hash_code(), java_hash(child.as_bytes()));
        }

        #[test]
        fn prop_hash_matches_power_formula(
            value in proptest::collection::vec(0x20u8..=0x7e, 1..=39),
        ) {
            prop_assert_eq!(java_hash(&value), hash_by_powers(&value));
        }
    }
}
