//! Fixed-length bit storage backing the filter
//!
//! Positions are 0-indexed, `[0, m-1]`, against exactly `m` bits. Bits only
//! ever go from 0 to 1.

use std::fmt;

use bitvec::prelude::*;

/// Largest number of bits a [`BitVector`] can hold
pub const MAX_BITS: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

/// Fixed-size bit array owned by a [`BloomFilter`](super::BloomFilter)
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    bits: BitVec<u8, Lsb0>,
}

impl BitVector {
    /// Create a vector of `len` cleared bits
    ///
    /// # Panics
    /// Panics if `len > MAX_BITS`.
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Set the bit at `pos`. Setting an already set bit has no effect.
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    pub fn set_bit(&mut self, pos: usize) {
        self.bits.set(pos, true);
    }

    /// Whether the bit at `pos` is set
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    pub fn get_bit(&self, pos: usize) -> bool {
        self.bits[pos]
    }

    /// Number of addressable bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Render as a string of `'0'`/`'1'`, most significant position first.
    ///
    /// The leftmost character is position `len() - 1` and the rightmost is
    /// position `0`, i.e. the vector read as a binary number. The output is
    /// always exactly `len()` characters long.
    pub fn render(&self) -> String {
        self.bits
            .iter()
            .rev()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len())
            .field("ones", &self.count_ones())
            .finish()
    }
}
