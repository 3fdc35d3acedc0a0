//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)         -- optimal hash functions
//! - FPR = (1 - e^(-kn/m))^k
//!
//! Both `m` and `k` are rounded half away from zero and clamped to at least 1.

use std::f64::consts::LN_2;

use tracing::debug;

use super::bit_vector::MAX_BITS;
use crate::error::FilterError;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// False positive rate once `expected_elements` have been added
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `expected_elements` - Expected number of elements to insert (n), must be positive
/// * `target_fpr` - Target false positive rate (p), strictly between 0 and 1
///
/// # Errors
/// `InvalidParameter` if `n` is zero, `p` is outside `(0, 1)`, or the derived
/// size does not fit in memory addressing.
pub fn calculate_optimal_parameters(
    expected_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams, FilterError> {
    if expected_elements == 0 {
        return Err(FilterError::invalid(
            "expected_elements",
            "must be positive",
        ));
    }
    validate_fpr(target_fpr)?;

    let n = expected_elements as f64;
    let raw_m = -(n * target_fpr.ln()) / (LN_2 * LN_2);
    if !raw_m.is_finite() || raw_m.round() >= MAX_BITS as f64 {
        return Err(FilterError::invalid(
            "size_bits",
            format!(
                "filter for n={expected_elements}, p={target_fpr} exceeds {MAX_BITS} bits"
            ),
        ));
    }
    let size_bits = round_to_count(raw_m);
    validate_size_bits(size_bits)?;

    let hash_count = optimal_k(size_bits, expected_elements);
    let expected_fpr = calculate_fpr(size_bits, expected_elements, hash_count);

    debug!(
        n = expected_elements,
        p = target_fpr,
        m = size_bits,
        k = hash_count,
        expected_fpr,
        "Derived optimal bloom filter parameters"
    );

    Ok(BloomFilterParams {
        size_bits,
        hash_count,
        expected_fpr,
    })
}

/// Reject a target rate outside the open interval `(0, 1)`
pub fn validate_fpr(target_fpr: f64) -> Result<(), FilterError> {
    if target_fpr.is_finite() && target_fpr > 0.0 && target_fpr < 1.0 {
        Ok(())
    } else {
        Err(FilterError::invalid(
            "target_fpr",
            format!("{target_fpr} is outside (0, 1)"),
        ))
    }
}

/// Reject a bit count of zero or one a bit vector cannot hold
pub fn validate_size_bits(size_bits: usize) -> Result<(), FilterError> {
    if size_bits == 0 {
        return Err(FilterError::invalid("size_bits", "must be positive"));
    }
    if size_bits > MAX_BITS {
        return Err(FilterError::invalid(
            "size_bits",
            format!("{size_bits} exceeds the maximum of {MAX_BITS} bits"),
        ));
    }
    Ok(())
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Calculate optimal k for given m and n, never less than 1
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    round_to_count((m as f64 / n as f64) * LN_2)
}

/// Round half away from zero, clamped to a minimum of 1
fn round_to_count(value: f64) -> usize {
    (value.round() as usize).max(1)
}
