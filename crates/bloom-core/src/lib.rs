//! # Bloom Core
//!
//! Probabilistic set membership: a Bloom filter answers "possibly present"
//! or "definitely absent" for a candidate element, trading a tunable false
//! positive rate for memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BitVector`: Fixed-length bit storage
//!   - `SeededHash` / `HashFamily`: Independently seeded hash functions
//!   - `BloomFilter`: The filter engine (`add` / `contains`)
//!   - `calculate_optimal_parameters`: `(n, p)` to `(m, k)`
//!   - `BloomConfig` / `BloomConfigBuilder`: Configuration with validation
//!
//! - **Service Layer** (`service/`): Observability
//!   - `InstrumentedFilter`: Filter reporting to a `MetricsRecorder`
//!
//! ## Invariants
//!
//! - No false negatives: if added, `contains()` MUST return true
//! - FPR after n insertions ~ (1 - e^(-kn/m))^k
//! - Hash seeds within one filter are pairwise distinct
//!
//! ## Usage Example
//!
//! ```
//! use bloom_core::BloomFilter;
//!
//! let mut filter = BloomFilter::new(64, 2)?;
//! filter.add("alpha")?;
//! filter.add("betta")?;
//! assert!(filter.contains("alpha")?);
//!
//! // m = 29, k = 7
//! let optimal = BloomFilter::optimal(3, 0.01)?;
//! assert_eq!((optimal.size(), optimal.hash_count()), (29, 7));
//! # Ok::<(), bloom_core::FilterError>(())
//! ```
//!
//! ## Concurrency
//!
//! Filters are plain single-threaded values. `add` takes `&mut self`; wrap a
//! filter in a lock to share it between threads.

pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

// Re-exports for convenience
pub use domain::{
    calculate_fpr, calculate_optimal_parameters, BitVector, BloomConfig, BloomConfigBuilder,
    BloomFilter, BloomFilterParams, FilterSizing, HashFamily, SeededHash, MAX_BITS,
    MAX_HASH_COUNT,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::InstrumentedFilter;
