//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Bit vector storage
//! - Seeded hash functions
//! - Core Bloom filter implementation
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bit_vector;
pub mod bloom_filter;
pub mod config;
pub mod element;
pub mod hash_functions;
pub mod parameters;

pub use bit_vector::{BitVector, MAX_BITS};
pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder, FilterSizing};
pub use element::encode_element;
pub use hash_functions::{seeded_hash, HashFamily, SeededHash, MAX_HASH_COUNT};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
