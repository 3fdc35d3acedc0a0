//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once added, `contains()` MUST return true
//! - Bits only transition 0 -> 1; `m` and the hash seeds never change
//! - FPR after n insertions ~ (1 - e^(-kn/m))^k

use std::fmt;

use rand::Rng;
use tracing::debug;

use super::bit_vector::BitVector;
use super::config::BloomConfig;
use super::element::encode_element;
use super::hash_functions::{hashes_from_seeds, HashFamily, SeededHash, MAX_HASH_COUNT};
use super::parameters::{calculate_fpr, calculate_optimal_parameters, validate_size_bits};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// The filter is not internally synchronized: `add` needs `&mut self`, so
/// sharing it across threads requires an external lock.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state (m bits)
    bits: BitVector,
    /// One seeded hash per slot (k)
    hashes: Vec<SeededHash>,
    /// Number of `add` calls (n)
    n: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter with `m` bits and `k` randomly seeded hashes
    ///
    /// # Errors
    /// `InvalidParameter` if `m` is zero or above [`MAX_BITS`](super::bit_vector::MAX_BITS),
    /// or `k` is zero or above [`MAX_HASH_COUNT`].
    pub fn new(m: usize, k: usize) -> Result<Self, FilterError> {
        Self::with_rng(m, k, rand::thread_rng())
    }

    /// Create a new Bloom filter drawing its hash seeds from `rng`
    pub fn with_rng<R: Rng>(m: usize, k: usize, rng: R) -> Result<Self, FilterError> {
        validate_size_bits(m)?;
        if k == 0 {
            return Err(FilterError::invalid("hash_count", "must be positive"));
        }
        if k > MAX_HASH_COUNT {
            return Err(FilterError::invalid(
                "hash_count",
                format!("{k} exceeds the {MAX_HASH_COUNT} distinct random seeds"),
            ));
        }
        let hashes = HashFamily::with_rng(rng).create_hashes(k);
        Ok(Self::from_parts(m, hashes))
    }

    /// Create a new Bloom filter with explicit hash seeds (k = `seeds.len()`)
    ///
    /// # Errors
    /// `InvalidParameter` if `m` is out of range or `seeds` is empty or has duplicates.
    pub fn with_seeds(m: usize, seeds: &[u32]) -> Result<Self, FilterError> {
        validate_size_bits(m)?;
        let hashes = hashes_from_seeds(seeds)?;
        Ok(Self::from_parts(m, hashes))
    }

    /// Create a new Bloom filter with optimal parameters for target FPR
    ///
    /// # Arguments
    /// * `expected_elements` - Expected number of elements (n)
    /// * `target_fpr` - Target false positive rate (p)
    pub fn optimal(expected_elements: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
        Self::new(params.size_bits, params.hash_count)
    }

    /// Create a Bloom filter as described by a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        let (size_bits, hash_count) = config.resolve()?;
        match &config.seeds {
            Some(seeds) => Self::with_seeds(size_bits, seeds),
            None => Self::new(size_bits, hash_count),
        }
    }

    fn from_parts(m: usize, hashes: Vec<SeededHash>) -> Self {
        debug!(
            m,
            k = hashes.len(),
            seeds = ?hashes.iter().map(SeededHash::seed).collect::<Vec<_>>(),
            "Created bloom filter"
        );
        Self {
            bits: BitVector::new(m),
            hashes,
            n: 0,
        }
    }

    /// Add an element, hashed through its `Display` text
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    pub fn add<T: fmt::Display + ?Sized>(&mut self, element: &T) -> Result<(), FilterError> {
        let bytes = encode_element(element)?;
        self.add_bytes(&bytes);
        Ok(())
    }

    /// Add raw bytes to the filter
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        let m = self.size();
        for hash in &self.hashes {
            self.bits.set_bit(hash.position(bytes, m));
        }
        self.n += 1;
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    pub fn contains<T: fmt::Display + ?Sized>(&self, element: &T) -> Result<bool, FilterError> {
        let bytes = encode_element(element)?;
        Ok(self.contains_bytes(&bytes))
    }

    /// Test if raw bytes might be in the filter
    ///
    /// Stops at the first unset bit.
    pub fn contains_bytes(&self, bytes: &[u8]) -> bool {
        self.positions(bytes).all(|pos| self.bits.get_bit(pos))
    }

    /// Bit positions of `bytes`, one per hash function, in hash order
    pub fn positions<'a>(&'a self, bytes: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let m = self.size();
        self.hashes.iter().map(move |hash| hash.position(bytes, m))
    }

    /// Get the filter size in bits (m)
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn bit_count(&self) -> usize {
        self.size()
    }

    /// Get the number of hash functions (k)
    pub fn hash_count(&self) -> usize {
        self.hashes.len()
    }

    /// Seeds of the hash functions, in hash order
    pub fn seeds(&self) -> Vec<u32> {
        self.hashes.iter().map(SeededHash::seed).collect()
    }

    /// Number of `add` calls so far, duplicates included
    pub fn elements_added(&self) -> usize {
        self.n
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// Estimate the current false positive rate
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn false_positive_rate(&self) -> f64 {
        calculate_fpr(self.size(), self.n, self.hash_count())
    }

    /// Bit contents as `'0'`/`'1'`, position `m-1` first
    pub fn render(&self) -> String {
        self.bits.render()
    }

    /// Alias of [`render`](Self::render)
    pub fn bits(&self) -> String {
        self.render()
    }
}

impl fmt::Display for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits, f)
    }
}
