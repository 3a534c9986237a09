//! Error types for cursor decoding and bitset operations

/// Errors reported by the cursor, the encoder and the bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Read would run past the end of the buffer
    OutOfBounds,
    /// Bit index outside `0..256`
    IndexOutOfRange,
    /// Output buffer too small for the write
    ShortBuffer,
    /// Value does not fit the field width it is written to
    ValueTooWide,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::OutOfBounds => "read past the end of the buffer",
            Error::IndexOutOfRange => "bit index out of range for a 256-bit set",
            Error::ShortBuffer => "buffer too small for operation",
            Error::ValueTooWide => "value does not fit the field width",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for wordstream operations
pub type Result<T> = core::result::Result<T, Error>;
