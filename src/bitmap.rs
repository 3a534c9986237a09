//! Packed 256-bit bitset
//!
//! [`Bitset256`] is a plain value: every update returns a new set and leaves
//! the receiver untouched. Bit 0 is the least significant bit of the
//! underlying [`U256`], so ordering and equality follow the integer value.
//!
//! Counting and bit scans run the SWAR and De Bruijn kernels from
//! [`bitops`](crate::bitops) over each 64-bit limb.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::bitops::{highest_bit_index64, lowest_bit_index64, popcount64};
use crate::error::{Error, Result};
use crate::uint::{LIMBS, U256};

/// Number of addressable bits
pub const BITSET_BITS: usize = 256;

/// Returned by the bit scans when the set is empty; never a valid index
pub const NOT_FOUND: usize = BITSET_BITS;

/// 256 independently addressable bits packed in one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Bitset256 {
    word: U256,
}

impl Bitset256 {
    /// No bits set
    pub const EMPTY: Self = Self { word: U256::ZERO };

    /// All 256 bits set
    pub const FULL: Self = Self { word: U256::MAX };

    /// Create an empty bitset
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Wrap an existing word
    #[inline]
    pub const fn from_word(word: U256) -> Self {
        Self { word }
    }

    /// Create from little-endian limbs (limb 0 holds bits 0..64)
    #[inline]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self {
            word: U256::from_limbs(limbs),
        }
    }

    /// Underlying word
    #[inline]
    pub const fn word(&self) -> U256 {
        self.word
    }

    /// Read bit `index`
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        let (limb, mask) = locate(index)?;
        Ok(self.word.limbs()[limb] & mask != 0)
    }

    /// Copy with bit `index` forced to 1
    #[inline]
    pub fn set(self, index: usize) -> Result<Self> {
        let (limb, mask) = locate(index)?;
        Ok(self.with_limb(limb, |l| l | mask))
    }

    /// Copy with bit `index` forced to 0
    #[inline]
    pub fn unset(self, index: usize) -> Result<Self> {
        let (limb, mask) = locate(index)?;
        Ok(self.with_limb(limb, |l| l & !mask))
    }

    /// Copy with bit `index` set to `value`
    #[inline]
    pub fn set_to(self, index: usize, value: bool) -> Result<Self> {
        if value {
            self.set(index)
        } else {
            self.unset(index)
        }
    }

    /// Copy with bit `index` flipped
    #[inline]
    pub fn toggle(self, index: usize) -> Result<Self> {
        let (limb, mask) = locate(index)?;
        Ok(self.with_limb(limb, |l| l ^ mask))
    }

    /// Number of set bits, `0..=256`
    #[inline]
    pub fn count(&self) -> usize {
        self.word
            .limbs()
            .iter()
            .map(|&limb| popcount64(limb) as usize)
            .sum()
    }

    /// Index of the least significant set bit, or [`NOT_FOUND`] when empty
    #[inline]
    pub fn find_first_set(&self) -> usize {
        for (i, &limb) in self.word.limbs().iter().enumerate() {
            if limb != 0 {
                return i * 64 + lowest_bit_index64(limb) as usize;
            }
        }
        NOT_FOUND
    }

    /// Index of the most significant set bit, or [`NOT_FOUND`] when empty
    #[inline]
    pub fn find_last_set(&self) -> usize {
        for (i, &limb) in self.word.limbs().iter().enumerate().rev() {
            if limb != 0 {
                return i * 64 + highest_bit_index64(limb) as usize;
            }
        }
        NOT_FOUND
    }

    /// True iff no bit is set
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.word.is_zero()
    }

    /// Iterator over set bit indices, ascending
    #[inline]
    pub fn iter_ones(&self) -> IterOnes {
        IterOnes { rest: *self }
    }

    #[inline]
    fn with_limb(self, limb: usize, f: impl FnOnce(u64) -> u64) -> Self {
        let mut limbs = self.word.limbs();
        limbs[limb] = f(limbs[limb]);
        Self::from_limbs(limbs)
    }
}

/// Split a bit index into (limb, single-bit mask)
#[inline]
fn locate(index: usize) -> Result<(usize, u64)> {
    if index >= BITSET_BITS {
        log::debug!("bit index {} outside 0..{}", index, BITSET_BITS);
        return Err(Error::IndexOutOfRange);
    }
    Ok((index / 64, 1u64 << (index % 64)))
}

/// Ascending iterator over the set bits of a [`Bitset256`]
#[derive(Debug, Clone)]
pub struct IterOnes {
    rest: Bitset256,
}

impl Iterator for IterOnes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.rest.find_first_set();
        if index == NOT_FOUND {
            return None;
        }
        // Clear the lowest set bit.
        let word = self.rest.word;
        self.rest = Bitset256::from_word(word & word.wrapping_sub(U256::ONE));
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.count();
        (n, Some(n))
    }
}

impl ExactSizeIterator for IterOnes {}

impl From<U256> for Bitset256 {
    #[inline]
    fn from(word: U256) -> Self {
        Self::from_word(word)
    }
}

impl From<Bitset256> for U256 {
    #[inline]
    fn from(set: Bitset256) -> Self {
        set.word
    }
}

impl BitAnd for Bitset256 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_word(self.word & rhs.word)
    }
}

impl BitOr for Bitset256 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_word(self.word | rhs.word)
    }
}

impl BitXor for Bitset256 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_word(self.word ^ rhs.word)
    }
}

impl Not for Bitset256 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_word(!self.word)
    }
}

impl BitAndAssign for Bitset256 {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.word &= rhs.word;
    }
}

impl BitOrAssign for Bitset256 {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.word |= rhs.word;
    }
}

impl BitXorAssign for Bitset256 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.word ^= rhs.word;
    }
}
