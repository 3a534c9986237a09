//! 256-bit word types
//!
//! [`U256`] is stored as four little-endian `u64` limbs (limb 0 holds bits
//! 0..64). [`I256`] reinterprets the same bit pattern as two's complement.
//! Only the operations the cursor and the bitset need are provided; this is
//! not a general bignum.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr,
};

/// Number of 64-bit limbs in a 256-bit word
pub const LIMBS: usize = 4;

/// Unsigned 256-bit integer
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256([u64; LIMBS]);

impl U256 {
    /// Bit width
    pub const BITS: u32 = 256;

    /// Byte width of the big-endian encoding
    pub const BYTES: usize = 32;

    /// Zero
    pub const ZERO: Self = Self([0; LIMBS]);

    /// One
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// All bits set, `2^256 - 1`
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Create from little-endian limbs
    #[inline]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Little-endian limbs
    #[inline]
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Decode a big-endian 32-byte word
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; LIMBS];
        // Last chunk of the big-endian form is the least significant limb.
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        Self(limbs)
    }

    /// Encode as a big-endian 32-byte word
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (limb, chunk) in self.0.iter().zip(out.rchunks_exact_mut(8)) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Decode up to 32 big-endian bytes, left-padding with zeros
    ///
    /// Returns `None` if `bytes` is longer than 32.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > Self::BYTES {
            return None;
        }
        let mut word = [0u8; 32];
        word[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        Some(Self::from_be_bytes(word))
    }

    /// True iff every bit is zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Low 64 bits, discarding the rest
    #[inline]
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    /// Narrow to `u128` if the value fits
    #[inline]
    pub const fn to_u128(&self) -> Option<u128> {
        if (self.0[2] | self.0[3]) != 0 {
            return None;
        }
        Some(((self.0[1] as u128) << 64) | self.0[0] as u128)
    }

    /// Narrow to `usize` if the value fits
    #[inline]
    pub fn to_usize(&self) -> Option<usize> {
        self.to_u128().and_then(|v| usize::try_from(v).ok())
    }

    /// Addition modulo `2^256`
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let mut out = [0u64; LIMBS];
        let mut carry = false;
        let mut i = 0;
        while i < LIMBS {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            out[i] = sum;
            carry = c1 | c2;
            i += 1;
        }
        Self(out)
    }

    /// Subtraction modulo `2^256`
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let mut out = [0u64; LIMBS];
        let mut borrow = false;
        let mut i = 0;
        while i < LIMBS {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            out[i] = diff;
            borrow = b1 | b2;
            i += 1;
        }
        Self(out)
    }

    /// Number of set bits, using the hardware count on each limb
    #[inline]
    pub const fn count_ones(&self) -> u32 {
        self.0[0].count_ones()
            + self.0[1].count_ones()
            + self.0[2].count_ones()
            + self.0[3].count_ones()
    }

    /// Number of trailing zero bits; 256 for zero
    pub fn trailing_zeros(&self) -> u32 {
        let mut total = 0;
        for &limb in self.0.iter() {
            if limb != 0 {
                return total + limb.trailing_zeros();
            }
            total += 64;
        }
        total
    }

    /// Number of leading zero bits; 256 for zero
    pub fn leading_zeros(&self) -> u32 {
        let mut total = 0;
        for &limb in self.0.iter().rev() {
            if limb != 0 {
                return total + limb.leading_zeros();
            }
            total += 64;
        }
        total
    }
}

impl Ord for U256 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant limb decides first.
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for U256 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self([
                    self.0[0] $op rhs.0[0],
                    self.0[1] $op rhs.0[1],
                    self.0[2] $op rhs.0[2],
                    self.0[3] $op rhs.0[3],
                ])
            }
        }

        impl $assign_trait for U256 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for U256 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    /// Shifts of 256 or more produce zero
    fn shl(self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; LIMBS];

        for i in limb_shift..LIMBS {
            let src = i - limb_shift;
            out[i] = self.0[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (64 - bit_shift);
            }
        }
        Self(out)
    }
}

impl Shr<u32> for U256 {
    type Output = Self;

    /// Shifts of 256 or more produce zero
    fn shr(self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }
        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; LIMBS];

        for i in 0..LIMBS - limb_shift {
            let src = i + limb_shift;
            out[i] = self.0[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < LIMBS {
                out[i] |= self.0[src + 1] << (64 - bit_shift);
            }
        }
        Self(out)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                #[inline]
                fn from(value: $t) -> Self {
                    Self([value as u64, 0, 0, 0])
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for U256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl From<bool> for U256 {
    #[inline]
    fn from(value: bool) -> Self {
        Self([value as u64, 0, 0, 0])
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let mut limbs = self.0.iter().rev().skip_while(|&&l| l == 0);
        match limbs.next() {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{:x}", top)?;
                limbs.try_for_each(|limb| write!(f, "{:016x}", limb))
            }
        }
    }
}

impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let mut limbs = self.0.iter().rev().skip_while(|&&l| l == 0);
        match limbs.next() {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{:X}", top)?;
                limbs.try_for_each(|limb| write!(f, "{:016X}", limb))
            }
        }
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}

/// Signed 256-bit integer, two's complement
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I256(U256);

impl I256 {
    /// Zero
    pub const ZERO: Self = Self(U256::ZERO);

    /// Minus one (all bits set)
    pub const MINUS_ONE: Self = Self(U256::MAX);

    /// Smallest value, `-2^255`
    pub const MIN: Self = Self(U256::from_limbs([0, 0, 0, 1 << 63]));

    /// Largest value, `2^255 - 1`
    pub const MAX: Self = Self(U256::from_limbs([
        u64::MAX,
        u64::MAX,
        u64::MAX,
        i64::MAX as u64,
    ]));

    /// Reinterpret a raw bit pattern
    #[inline]
    pub const fn from_bits(bits: U256) -> Self {
        Self(bits)
    }

    /// Raw bit pattern
    #[inline]
    pub const fn into_bits(self) -> U256 {
        self.0
    }

    /// Decode a big-endian two's-complement word
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    /// Encode as a big-endian two's-complement word
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// True iff the sign bit is set
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0.limbs()[3] >> 63 == 1
    }

    /// Narrow to `i128` if the value fits
    pub const fn to_i128(&self) -> Option<i128> {
        let limbs = self.0.limbs();
        // Bits 127..256 must all equal the i128 sign bit.
        let ext = if limbs[1] >> 63 == 1 { u64::MAX } else { 0 };
        if limbs[2] != ext || limbs[3] != ext {
            return None;
        }
        Some((((limbs[1] as u128) << 64) | limbs[0] as u128) as i128)
    }

    /// Absolute value as an unsigned word; `MIN` maps to `2^255`
    #[inline]
    pub const fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            let [a, b, c, d] = self.0.limbs();
            U256::from_limbs([!a, !b, !c, !d]).wrapping_add(U256::ONE)
        } else {
            self.0
        }
    }
}

impl From<i128> for I256 {
    #[inline]
    fn from(value: i128) -> Self {
        let ext = if value < 0 { u64::MAX } else { 0 };
        let raw = value as u128;
        Self(U256::from_limbs([raw as u64, (raw >> 64) as u64, ext, ext]))
    }
}

impl From<i64> for I256 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from(value as i128)
    }
}

impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Same sign: two's complement preserves unsigned order.
            _ => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for I256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "I256({}{:#x})", sign, self.unsigned_abs())
    }
}
