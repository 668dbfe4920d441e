//! Display buffer: one byte per digit across the whole chain.
//!
//! Index 0 is the leftmost position of chip 0. Chip `k` owns indices
//! `8k..8k + 8`.

use alloc::vec;
use alloc::vec::Vec;

use crate::registers::DIGITS_PER_CHIP;

/// Segment patterns for every digit of the chain.
///
/// The length is always `8 * chip_count`; it only changes through
/// [`resize`](Self::resize), which also clears the content.
///
/// # Example
///
/// ```rust
/// use rs_max7219::DisplayBuffer;
///
/// let mut buf = DisplayBuffer::new(2);
/// assert_eq!(buf.len(), 16);
///
/// buf.set(9, 0x7F);
/// assert_eq!(buf.get(9), Some(0x7F));
/// assert_eq!(buf.chip(1)[1], 0x7F);
///
/// // Out of range writes are ignored
/// assert!(!buf.set(16, 0xFF));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    data: Vec<u8>,
}

impl DisplayBuffer {
    /// Creates a zeroed buffer for `chips` chips (at least one).
    pub fn new(chips: usize) -> Self {
        Self {
            data: vec![0; chips.max(1) * DIGITS_PER_CHIP],
        }
    }

    /// Reallocates for `chips` chips and clears every position.
    pub fn resize(&mut self, chips: usize) {
        self.data = vec![0; chips.max(1) * DIGITS_PER_CHIP];
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a buffer covers at least one chip.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of chips this buffer covers.
    #[inline]
    pub fn chips(&self) -> usize {
        self.data.len() / DIGITS_PER_CHIP
    }

    /// Pattern at `pos`, if in range.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    /// Writes `pattern` at `pos`. Returns false when `pos` is out of range.
    #[inline]
    pub fn set(&mut self, pos: usize, pattern: u8) -> bool {
        match self.data.get_mut(pos) {
            Some(slot) => {
                *slot = pattern;
                true
            }
            None => false,
        }
    }

    /// ORs `bits` into the pattern at `pos`. Returns false when out of range.
    #[inline]
    pub fn merge(&mut self, pos: usize, bits: u8) -> bool {
        match self.data.get_mut(pos) {
            Some(slot) => {
                *slot |= bits;
                true
            }
            None => false,
        }
    }

    /// Zeroes every position.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// The eight patterns of chip `chip`.
    ///
    /// # Panics
    ///
    /// Panics if `chip >= self.chips()`.
    pub fn chip(&self, chip: usize) -> &[u8] {
        let start = chip * DIGITS_PER_CHIP;
        &self.data[start..start + DIGITS_PER_CHIP]
    }

    /// Pattern in slot `slot` (0..8) of every chip, in chip order.
    pub fn column(&self, slot: usize) -> impl Iterator<Item = u8> + '_ {
        self.data
            .chunks_exact(DIGITS_PER_CHIP)
            .map(move |chip| chip[slot % DIGITS_PER_CHIP])
    }

    /// All positions.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// All positions, mutable. The length cannot change through this.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(1)
    }
}
