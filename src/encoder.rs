//! Packed big-endian field encoder
//!
//! Writes the layout [`ByteCursor`](crate::cursor::ByteCursor) reads, into a
//! caller-provided buffer, without allocating.

use crate::address::Address;
use crate::cursor::LENGTH_WORD_SIZE;
use crate::error::{Error, Result};
use crate::uint::{I256, U256};

/// Field encoder that writes into a user-provided buffer
pub struct WordEncoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WordEncoder<'a> {
    /// Create new encoder with the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Write raw bytes without length prefix
    #[inline]
    pub fn put_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let end = match self.pos.checked_add(bytes.len()) {
            Some(end) if end <= self.buf.len() => end,
            _ => {
                log::debug!(
                    "encoder overflow: {} bytes at offset {}, capacity {}",
                    bytes.len(),
                    self.pos,
                    self.buf.len()
                );
                return Err(Error::ShortBuffer);
            }
        };
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Write the low `width` bytes of a big-endian word, rejecting values
    /// that need more than `width` bytes
    fn put_word(&mut self, value: U256, width: usize) -> Result<()> {
        let bytes = value.to_be_bytes();
        let (high, low) = bytes.split_at(U256::BYTES - width);
        if high.iter().any(|&b| b != 0) {
            return Err(Error::ValueTooWide);
        }
        self.put_raw(low)
    }

    /// Write a 20-byte address
    #[inline]
    pub fn put_address(&mut self, value: &Address) -> Result<()> {
        self.put_raw(value.as_bytes())
    }

    /// Write a boolean as one byte, 0 or 1
    #[inline]
    pub fn put_bool(&mut self, value: bool) -> Result<()> {
        self.put_uint8(value as u8)
    }

    /// Write a u8 value
    #[inline]
    pub fn put_uint8(&mut self, value: u8) -> Result<()> {
        self.put_raw(&[value])
    }

    /// Write a u16 value (big-endian)
    #[inline]
    pub fn put_uint16(&mut self, value: u16) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a 3-byte big-endian value; fails if `value >= 2^24`
    #[inline]
    pub fn put_uint24(&mut self, value: u32) -> Result<()> {
        if value >> 24 != 0 {
            return Err(Error::ValueTooWide);
        }
        self.put_raw(&value.to_be_bytes()[1..])
    }

    /// Write a u32 value (big-endian)
    #[inline]
    pub fn put_uint32(&mut self, value: u32) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a 6-byte big-endian value; fails if `value >= 2^48`
    #[inline]
    pub fn put_uint48(&mut self, value: u64) -> Result<()> {
        if value >> 48 != 0 {
            return Err(Error::ValueTooWide);
        }
        self.put_raw(&value.to_be_bytes()[2..])
    }

    /// Write a u64 value (big-endian)
    #[inline]
    pub fn put_uint64(&mut self, value: u64) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a u128 value (big-endian)
    #[inline]
    pub fn put_uint128(&mut self, value: u128) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a 20-byte big-endian value; fails if `value >= 2^160`
    #[inline]
    pub fn put_uint160(&mut self, value: U256) -> Result<()> {
        self.put_word(value, 20)
    }

    /// Write a 32-byte big-endian value
    #[inline]
    pub fn put_uint256(&mut self, value: U256) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a 32-byte two's-complement value
    #[inline]
    pub fn put_int256(&mut self, value: I256) -> Result<()> {
        self.put_raw(&value.to_be_bytes())
    }

    /// Write a raw 4-byte block
    #[inline]
    pub fn put_bytes4(&mut self, value: [u8; 4]) -> Result<()> {
        self.put_raw(&value)
    }

    /// Write a raw 32-byte block
    #[inline]
    pub fn put_bytes32(&mut self, value: [u8; 32]) -> Result<()> {
        self.put_raw(&value)
    }

    /// Write a dynamic byte array: 32-byte length word, then the payload
    ///
    /// Nothing is written unless both parts fit.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if LENGTH_WORD_SIZE + bytes.len() > self.remaining() {
            log::debug!(
                "encoder overflow: dynamic bytes of length {} with {} bytes left",
                bytes.len(),
                self.remaining()
            );
            return Err(Error::ShortBuffer);
        }
        self.put_uint256(U256::from(bytes.len()))?;
        self.put_raw(bytes)
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Finish encoding and return the number of bytes written
    #[inline]
    pub fn finish(self) -> usize {
        self.pos
    }
}
