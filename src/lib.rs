//! wordstream: zero-copy big-endian field cursor and packed 256-bit bitset
//!
//! Two independent leaf primitives:
//!
//! - [`ByteCursor`] walks a borrowed byte buffer front to back, decoding
//!   packed big-endian fields (integers of 1 to 32 bytes, addresses, fixed
//!   blocks and length-prefixed byte arrays). It never copies the buffer.
//! - [`Bitset256`] is a value type over a 256-bit word with bit updates,
//!   SWAR popcount and De Bruijn first/last set bit scans.
//!
//! [`WordEncoder`] writes the layout the cursor reads.
//!
//! # Layout
//!
//! ```text
//! +-----------+--------+-------------+----------------------------+
//! | uint24    | bool   | address     | bytes                      |
//! | 3 bytes   | 1 byte | 20 bytes    | len u256 (32) | len bytes  |
//! +-----------+--------+-------------+----------------------------+
//! ```
//!
//! Fields are packed with no padding and no tags; reader and writer agree on
//! order and widths out of band.
//!
//! # Example
//!
//! ```rust
//! use wordstream::*;
//!
//! let mut buf = [0u8; 128];
//! let mut encoder = WordEncoder::new(&mut buf);
//! encoder.put_uint24(0x0a0b0c)?;
//! encoder.put_bool(true)?;
//! encoder.put_bytes(b"payload")?;
//! let len = encoder.finish();
//!
//! let mut cursor = ByteCursor::new(&buf[..len]);
//! assert_eq!(cursor.parse_uint24()?, 0x0a0b0c);
//! assert!(cursor.parse_bool()?);
//! assert_eq!(cursor.parse_bytes()?, b"payload");
//! assert!(!cursor.is_not_empty());
//!
//! let set = Bitset256::new().set(5)?.set(200)?;
//! assert_eq!(set.count(), 2);
//! assert_eq!(set.find_first_set(), 5);
//! assert_eq!(set.find_last_set(), 200);
//! # Ok::<(), wordstream::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod address;
pub mod bitmap;
pub mod bitops;
pub mod cursor;
pub mod encoder;
pub mod error;
pub mod uint;

// Re-export main types
pub use address::Address;
pub use bitmap::{Bitset256, NOT_FOUND};
pub use cursor::ByteCursor;
pub use encoder::WordEncoder;
pub use error::{Error, Result};
pub use uint::{I256, U256};
