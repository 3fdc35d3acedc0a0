//! Canonical byte encoding of filter elements
//!
//! An element is hashed through its `Display` text, taken as UTF-8 bytes.
//! Equal text always yields equal bytes, so `42_u32` and `"42"` land on the
//! same bit positions.

use std::fmt::{self, Write};

use crate::error::FilterError;

/// Encode `element` as the bytes of its `Display` representation
///
/// # Errors
/// `Encoding` if the element's `Display` implementation reports an error.
pub fn encode_element<T: fmt::Display + ?Sized>(element: &T) -> Result<Vec<u8>, FilterError> {
    let mut text = String::new();
    write!(text, "{element}").map_err(|_| {
        FilterError::Encoding(format!(
            "`{}` failed to format as text",
            std::any::type_name::<T>()
        ))
    })?;
    Ok(text.into_bytes())
}
