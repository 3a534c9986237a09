//! Zero-copy forward cursor over packed big-endian fields
//!
//! The layout has no self-description: callers issue `parse_*` calls in the
//! exact order the encoder wrote the fields. Every read is bounds checked;
//! a failing read returns [`Error::OutOfBounds`] and leaves the position
//! where it was.

use crate::address::Address;
use crate::error::{Error, Result};
use crate::uint::{I256, U256};

/// Width of the length word in front of a dynamic byte array
pub const LENGTH_WORD_SIZE: usize = 32;

/// Cursor for reading packed fields with position tracking
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `buf`
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read position
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Length of the underlying buffer
    #[inline]
    pub const fn end(&self) -> usize {
        self.buf.len()
    }

    /// Get remaining bytes in cursor
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True while unread bytes remain
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Check if cursor is at end
    #[inline]
    pub const fn is_at_end(&self) -> bool {
        !self.is_not_empty()
    }

    /// Consume `n` bytes and return them
    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(n)?;
        self.pos += n;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Big-endian unsigned field of `width` bytes (at most 32)
    #[inline]
    fn take_word(&mut self, width: usize) -> Result<U256> {
        debug_assert!(width <= U256::BYTES);
        let mut word = [0u8; 32];
        word[U256::BYTES - width..].copy_from_slice(self.take(width)?);
        Ok(U256::from_be_bytes(word))
    }

    /// Peek at bytes without advancing cursor
    #[inline]
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8]> {
        match self.pos.checked_add(n) {
            Some(end) if end <= self.buf.len() => Ok(&self.buf[self.pos..end]),
            _ => {
                log::debug!(
                    "cursor over-read: {} bytes requested at offset {}, {} available",
                    n,
                    self.pos,
                    self.remaining()
                );
                Err(Error::OutOfBounds)
            }
        }
    }

    /// Skip bytes in the cursor
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Read `n` raw bytes without length prefix
    ///
    /// Returns a zero-copy slice into the original buffer
    #[inline]
    pub fn parse_raw(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Read a fixed block of `N` bytes
    #[inline]
    pub fn parse_bytes_n<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take_array()
    }

    /// Read a 20-byte address
    #[inline]
    pub fn parse_address(&mut self) -> Result<Address> {
        self.take_array().map(Address)
    }

    /// Read a one-byte boolean; any nonzero byte is `true`
    #[inline]
    pub fn parse_bool(&mut self) -> Result<bool> {
        Ok(self.parse_uint8()? != 0)
    }

    /// Read a u8 value
    #[inline]
    pub fn parse_uint8(&mut self) -> Result<u8> {
        let [b] = self.take_array()?;
        Ok(b)
    }

    /// Read a u16 value (big-endian)
    #[inline]
    pub fn parse_uint16(&mut self) -> Result<u16> {
        self.take_array().map(u16::from_be_bytes)
    }

    /// Read a 3-byte big-endian value
    #[inline]
    pub fn parse_uint24(&mut self) -> Result<u32> {
        let [a, b, c] = self.take_array()?;
        Ok(u32::from_be_bytes([0, a, b, c]))
    }

    /// Read a u32 value (big-endian)
    #[inline]
    pub fn parse_uint32(&mut self) -> Result<u32> {
        self.take_array().map(u32::from_be_bytes)
    }

    /// Read a 6-byte big-endian value
    #[inline]
    pub fn parse_uint48(&mut self) -> Result<u64> {
        let [a, b, c, d, e, f] = self.take_array()?;
        Ok(u64::from_be_bytes([0, 0, a, b, c, d, e, f]))
    }

    /// Read a u64 value (big-endian)
    #[inline]
    pub fn parse_uint64(&mut self) -> Result<u64> {
        self.take_array().map(u64::from_be_bytes)
    }

    /// Read a u128 value (big-endian)
    #[inline]
    pub fn parse_uint128(&mut self) -> Result<u128> {
        self.take_array().map(u128::from_be_bytes)
    }

    /// Read a 20-byte big-endian value; the high 96 bits of the result are zero
    #[inline]
    pub fn parse_uint160(&mut self) -> Result<U256> {
        self.take_word(20)
    }

    /// Read a 32-byte big-endian value
    #[inline]
    pub fn parse_uint256(&mut self) -> Result<U256> {
        self.take_array().map(U256::from_be_bytes)
    }

    /// Read a 32-byte big-endian two's-complement value
    #[inline]
    pub fn parse_int256(&mut self) -> Result<I256> {
        self.take_array().map(I256::from_be_bytes)
    }

    /// Read a raw 4-byte block
    #[inline]
    pub fn parse_bytes4(&mut self) -> Result<[u8; 4]> {
        self.take_array()
    }

    /// Read a raw 32-byte block
    #[inline]
    pub fn parse_bytes32(&mut self) -> Result<[u8; 32]> {
        self.take_array()
    }

    /// Read a dynamic byte array: a 32-byte big-endian length word followed
    /// by that many payload bytes
    ///
    /// Returns a zero-copy slice into the original buffer and advances by
    /// `32 + length`. On failure nothing is consumed, including the length word.
    pub fn parse_bytes(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        let result = self.parse_uint256().and_then(|len| match len.to_usize() {
            Some(len) => self.take(len),
            None => {
                log::debug!("length word {} at offset {} exceeds address space", len, start);
                Err(Error::OutOfBounds)
            }
        });
        if result.is_err() {
            self.pos = start;
        }
        result
    }
}
