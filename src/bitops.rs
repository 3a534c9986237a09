//! 64-bit bit-twiddling kernels
//!
//! SWAR population count and De Bruijn bit scans over a single `u64`.
//! [`Bitset256`](crate::bitset::Bitset256) runs these limb by limb, so every
//! kernel here is branch-light and usable in `const` context.

/// `0b0101…`: low bit of every 2-bit pair
pub const SWAR_M1: u64 = 0x5555_5555_5555_5555;

/// `0b0011…`: low two bits of every nibble
pub const SWAR_M2: u64 = 0x3333_3333_3333_3333;

/// `0x0f…`: low nibble of every byte
pub const SWAR_M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;

/// `0x01` in every byte. `x * SWAR_H01` accumulates the sum of all bytes of
/// `x` into the top byte, as long as that sum stays below 256.
pub const SWAR_H01: u64 = 0x0101_0101_0101_0101;

/// A B(2, 6) De Bruijn sequence: every 6-bit window of `DEBRUIJN_64 << i`
/// taken from the top is distinct for `i` in `0..64`, and the sequence starts
/// with six zero bits so the window never wraps.
pub const DEBRUIJN_64: u64 = 0x03f7_9d71_b4cb_0a89;

/// Maps the top 6 bits of `DEBRUIJN_64 << i` back to `i`
const DEBRUIJN_INDEX: [u8; 64] = generate_debruijn_table();

/// Build the De Bruijn lookup table at compile time
const fn generate_debruijn_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0;

    while i < 64 {
        table[((DEBRUIJN_64 << i) >> 58) as usize] = i as u8;
        i += 1;
    }

    table
}

/// Number of set bits in `x`
///
/// Each step halves the number of counters while doubling their width:
/// 32 two-bit counters, 16 nibble counters, 8 byte counters, then one
/// horizontal multiply folds the bytes together.
#[inline]
pub const fn popcount64(x: u64) -> u32 {
    // Each pair `ab` becomes `ab - a`, i.e. a + b.
    let x = x - ((x >> 1) & SWAR_M1);
    let x = (x & SWAR_M2) + ((x >> 2) & SWAR_M2);
    // Nibble counts are at most 4, so their pairwise sum cannot carry.
    let x = (x + (x >> 4)) & SWAR_M4;
    (x.wrapping_mul(SWAR_H01) >> 56) as u32
}

/// Index of the lowest set bit, or 64 when `x == 0`
#[inline]
pub const fn lowest_bit_index64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    let isolated = x & x.wrapping_neg();
    debruijn_lookup(isolated)
}

/// Index of the highest set bit, or 64 when `x == 0`
#[inline]
pub const fn highest_bit_index64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    // Smear the highest bit into every lower position, then keep only it.
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    debruijn_lookup(x ^ (x >> 1))
}

/// `power_of_two` must have exactly one bit set
#[inline]
const fn debruijn_lookup(power_of_two: u64) -> u32 {
    DEBRUIJN_INDEX[(power_of_two.wrapping_mul(DEBRUIJN_64) >> 58) as usize] as u32
}
