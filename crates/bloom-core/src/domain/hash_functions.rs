//! Seeded hash functions for the Bloom filter
//!
//! Each hash function is a plain seed value. The hashing itself is a free
//! function folding the element bytes through a multiplicative accumulator:
//!
//! ```text
//! acc = 1
//! acc = (seed * acc + byte) mod 2^32    for each byte
//! ```
//!
//! Seeds handed out by one [`HashFamily`] are pairwise distinct, so no slot
//! of a filter's `k` functions is ever redundant.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::FilterError;

/// Smallest seed drawn at random
pub const MIN_SEED: u32 = 33;

/// Number of distinct odd seeds in `[MIN_SEED, u32::MAX]`, the most hash
/// functions one [`HashFamily`] can issue
pub const MAX_HASH_COUNT: usize = ((u32::MAX - MIN_SEED) / 2 + 1) as usize;

/// Fold `bytes` into a 32-bit hash using `seed` as the multiplier
///
/// Arithmetic wraps modulo 2^32.
pub fn seeded_hash(seed: u32, bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(1u32, |acc, &byte| seed.wrapping_mul(acc).wrapping_add(u32::from(byte)))
}

/// One member of a filter's hash family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeededHash {
    seed: u32,
}

impl SeededHash {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Raw 32-bit hash of `bytes`
    pub fn hash(&self, bytes: &[u8]) -> u32 {
        seeded_hash(self.seed, bytes)
    }

    /// Bit position of `bytes` in a filter of `m` bits
    pub fn position(&self, bytes: &[u8], m: usize) -> usize {
        (u64::from(self.hash(bytes)) % m as u64) as usize
    }
}

/// Source of independently seeded hash functions
///
/// Random seeds are odd values in `[MIN_SEED, u32::MAX]`. An odd multiplier
/// is invertible modulo 2^32, so leading bytes are never shifted out of the
/// accumulator.
pub struct HashFamily<R: Rng = ThreadRng> {
    rng: R,
    issued: HashSet<u32>,
}

impl HashFamily<ThreadRng> {
    /// Family drawing seeds from the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for HashFamily<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HashFamily<R> {
    /// Family drawing seeds from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Create one hash function whose seed differs from every seed this
    /// family has issued so far
    ///
    /// Loops forever once [`MAX_HASH_COUNT`] seeds have been issued; callers
    /// bound `k` before drawing.
    pub fn create_hash(&mut self) -> SeededHash {
        loop {
            let seed = self.rng.gen_range(MIN_SEED..=u32::MAX) | 1;
            if self.issued.insert(seed) {
                return SeededHash::new(seed);
            }
        }
    }

    /// Create `k` hash functions with pairwise distinct seeds
    pub fn create_hashes(&mut self, k: usize) -> Vec<SeededHash> {
        (0..k).map(|_| self.create_hash()).collect()
    }
}

/// Build hash functions from caller-chosen seeds
///
/// Rejects an empty list and duplicated seeds.
pub fn hashes_from_seeds(seeds: &[u32]) -> Result<Vec<SeededHash>, FilterError> {
    if seeds.is_empty() {
        return Err(FilterError::invalid("seeds", "at least one seed is required"));
    }

    let mut seen = HashSet::with_capacity(seeds.len());
    for &seed in seeds {
        if !seen.insert(seed) {
            return Err(FilterError::invalid(
                "seeds",
                format!("duplicate seed {seed}"),
            ));
        }
    }

    Ok(seeds.iter().copied().map(SeededHash::new).collect())
}
