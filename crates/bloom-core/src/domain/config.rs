//! Bloom filter configuration and validation
//!
//! A configuration states how a filter is sized, either explicitly with
//! `(m, k)` or through the optimal derivation from `(n, p)`, and may pin the
//! hash seeds so the filter is reproducible.
//!
//! # Example
//!
//! ```
//! use bloom_core::{BloomConfigBuilder, BloomFilter};
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_elements(1_000)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("valid filter");
//! assert_eq!(filter.hash_count(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_functions::hashes_from_seeds;
use super::parameters::{calculate_optimal_parameters, validate_size_bits};
use crate::error::FilterError;

/// Default expected element count for optimal sizing
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 1_000;

/// Default target false positive rate for optimal sizing
pub const DEFAULT_TARGET_FPR: f64 = 0.01;

/// How the filter's bit count and hash count are chosen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FilterSizing {
    /// Caller-chosen `m` and `k`
    Explicit { size_bits: usize, hash_count: usize },
    /// `m` and `k` derived from expected elements and target FPR
    Optimal {
        expected_elements: usize,
        target_fpr: f64,
    },
}

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    pub sizing: FilterSizing,
    /// Fixed hash seeds; their count must equal the resolved hash count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeds: Option<Vec<u32>>,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            sizing: FilterSizing::Optimal {
                expected_elements: DEFAULT_EXPECTED_ELEMENTS,
                target_fpr: DEFAULT_TARGET_FPR,
            },
            seeds: None,
        }
    }
}

impl BloomConfig {
    /// Explicitly sized configuration
    pub fn explicit(size_bits: usize, hash_count: usize) -> Self {
        Self {
            sizing: FilterSizing::Explicit {
                size_bits,
                hash_count,
            },
            seeds: None,
        }
    }

    /// Optimally sized configuration
    pub fn optimal(expected_elements: usize, target_fpr: f64) -> Self {
        Self {
            sizing: FilterSizing::Optimal {
                expected_elements,
                target_fpr,
            },
            seeds: None,
        }
    }

    /// Builder-style method to pin hash seeds
    pub fn with_seeds(mut self, seeds: Vec<u32>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        self.resolve().map(|_| ())
    }

    /// Resolve the configuration to `(size_bits, hash_count)`
    pub fn resolve(&self) -> Result<(usize, usize), FilterError> {
        let (size_bits, hash_count) = match self.sizing {
            FilterSizing::Explicit {
                size_bits,
                hash_count,
            } => {
                validate_size_bits(size_bits)?;
                if hash_count == 0 {
                    return Err(FilterError::invalid("hash_count", "must be positive"));
                }
                (size_bits, hash_count)
            }
            FilterSizing::Optimal {
                expected_elements,
                target_fpr,
            } => {
                let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
                (params.size_bits, params.hash_count)
            }
        };

        if let Some(seeds) = &self.seeds {
            hashes_from_seeds(seeds)?;
            if seeds.len() != hash_count {
                return Err(FilterError::invalid(
                    "seeds",
                    format!("expected {hash_count} seeds, got {}", seeds.len()),
                ));
            }
        }

        Ok((size_bits, hash_count))
    }
}

/// Builder for BloomConfig with validation
///
/// Setting `size_bits` or `hash_count` selects explicit sizing and both must
/// then be given. Otherwise the filter is sized optimally, with defaults for
/// whichever of `expected_elements`/`target_fpr` is left unset.
#[derive(Default)]
pub struct BloomConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<usize>,
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
    seeds: Option<Vec<u32>>,
}

impl BloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set filter size in bits (explicit sizing)
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set number of hash functions (explicit sizing)
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Set expected number of elements (optimal sizing)
    pub fn expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = Some(n);
        self
    }

    /// Set target false positive rate (optimal sizing)
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Pin the hash seeds
    pub fn seeds(mut self, seeds: Vec<u32>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let explicit = self.size_bits.is_some() || self.hash_count.is_some();
        let optimal = self.expected_elements.is_some() || self.target_fpr.is_some();

        let sizing = match (explicit, optimal) {
            (true, true) => {
                return Err(FilterError::invalid(
                    "sizing",
                    "explicit and optimal sizing are mutually exclusive",
                ))
            }
            (true, false) => FilterSizing::Explicit {
                size_bits: self
                    .size_bits
                    .ok_or_else(|| FilterError::invalid("size_bits", "required with hash_count"))?,
                hash_count: self
                    .hash_count
                    .ok_or_else(|| FilterError::invalid("hash_count", "required with size_bits"))?,
            },
            (false, _) => FilterSizing::Optimal {
                expected_elements: self.expected_elements.unwrap_or(DEFAULT_EXPECTED_ELEMENTS),
                target_fpr: self.target_fpr.unwrap_or(DEFAULT_TARGET_FPR),
            },
        };

        let config = BloomConfig {
            sizing,
            seeds: self.seeds,
        };
        config.validate()?;
        Ok(config)
    }
}
