//! Error types for Bloom filter construction and element encoding

use thiserror::Error;

/// Errors that can occur when building or feeding a Bloom filter
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Element encoding failed: {0}")]
    Encoding(String),
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FilterError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
