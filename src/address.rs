//! 20-byte account identity

use core::fmt;

use crate::uint::U256;

/// Byte width of an address
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte address, stored in its big-endian wire order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Byte width
    pub const LEN: usize = ADDRESS_LEN;

    /// The all-zero address
    pub const ZERO: Self = Self([0; Self::LEN]);

    /// Copy from a slice of exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Widen to a 256-bit word (high 96 bits zero)
    pub fn to_u256(&self) -> U256 {
        let mut word = [0u8; 32];
        word[32 - Self::LEN..].copy_from_slice(&self.0);
        U256::from_be_bytes(word)
    }

    /// Keep the low 160 bits of a word
    pub fn from_u256(word: U256) -> Self {
        let bytes = word.to_be_bytes();
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(&bytes[32 - Self::LEN..]);
        Self(out)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    #[inline]
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self)
    }
}
