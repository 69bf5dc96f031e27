//! Fixed-length bit vector.
//!
//! A [`BitVector`] is the 12-dot selection pattern: index 0 is the
//! most-significant bit, so `[true, false, ..]` reads as binary left to
//! right. The length invariant is carried in the type; a partially
//! initialized vector cannot be expressed.

use crate::BitVectorError;

/// Ordered sequence of exactly 12 booleans, index 0 = most-significant bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitVector([bool; Self::LEN]);

impl BitVector {
    /// Number of bits in every vector.
    pub const LEN: usize = 12;

    /// Largest value representable in [`Self::LEN`] bits (4095).
    pub const MAX_VALUE: u16 = (1 << Self::LEN) - 1;

    /// All-false vector ("nothing selected").
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose a value into bits, MSB first: `bit[i] = (value >> (11 - i)) & 1`.
    ///
    /// Only the low [`Self::LEN`] bits of `value` are used.
    pub fn from_value(value: u16) -> Self {
        let value = value & Self::MAX_VALUE;
        let mut bits = [false; Self::LEN];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (value >> (Self::LEN - 1 - i)) & 1 == 1;
        }
        Self(bits)
    }

    /// Compose the bits into an unsigned value: `Σ bit[i] · 2^(11 − i)`.
    pub fn value(self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(|(i, _)| 1 << (Self::LEN - 1 - i))
            .sum()
    }

    /// Bit at `index`. `None` when `index` is out of range.
    pub fn get(self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    /// Flip the bit at `index`.
    ///
    /// Out-of-range indices are ignored and reported as `false`; a hit-test
    /// surface may occasionally fail to resolve a real control.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(bit) => {
                *bit = !*bit;
                true
            },
            None => false,
        }
    }

    /// True when no bit is set.
    pub fn is_zero(self) -> bool {
        !self.0.iter().any(|&bit| bit)
    }

    /// Clear every bit.
    pub fn reset(&mut self) {
        self.0 = [false; Self::LEN];
    }

    /// The underlying bits, MSB first.
    pub fn bits(self) -> [bool; Self::LEN] {
        self.0
    }
}

impl From<[bool; BitVector::LEN]> for BitVector {
    fn from(bits: [bool; Self::LEN]) -> Self {
        Self(bits)
    }
}

impl TryFrom<&[bool]> for BitVector {
    type Error = BitVectorError;

    fn try_from(slice: &[bool]) -> Result<Self, Self::Error> {
        let bits: [bool; Self::LEN] = slice.try_into().map_err(|_| {
            BitVectorError::WrongLength { expected: Self::LEN, actual: slice.len() }
        })?;
        Ok(Self(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero() {
        let bits = BitVector::new();
        assert!(bits.is_zero());
        assert_eq!(bits.value(), 0);
    }

    #[test]
    fn lsb_only_is_one() {
        let mut bits = BitVector::new();
        assert!(bits.toggle(11));
        assert_eq!(bits.value(), 1);
    }

    #[test]
    fn msb_only_is_2048() {
        let mut bits = BitVector::new();
        assert!(bits.toggle(0));
        assert_eq!(bits.value(), 2048);
    }

    #[test]
    fn all_set_is_max() {
        let bits = BitVector::from([true; BitVector::LEN]);
        assert_eq!(bits.value(), 4095);
    }

    #[test]
    fn value_roundtrip_is_identity() {
        for value in 0..=BitVector::MAX_VALUE {
            assert_eq!(BitVector::from_value(value).value(), value);
        }
    }

    #[test]
    fn from_value_masks_high_bits() {
        assert_eq!(BitVector::from_value(0xF001).value(), 1);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut bits = BitVector::new();
        assert!(!bits.toggle(12));
        assert!(bits.is_zero());
    }

    #[test]
    fn toggle_twice_restores() {
        let mut bits = BitVector::new();
        assert!(bits.toggle(5));
        assert!(bits.toggle(5));
        assert!(bits.is_zero());
    }

    #[test]
    fn try_from_rejects_wrong_length() {
        let short = [false; 11];
        assert_eq!(
            BitVector::try_from(short.as_slice()),
            Err(BitVectorError::WrongLength { expected: 12, actual: 11 })
        );
    }

    #[test]
    fn reset_clears_all() {
        let mut bits = BitVector::from_value(4095);
        bits.reset();
        assert!(bits.is_zero());
    }
}
