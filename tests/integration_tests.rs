//! Integration tests for wordstream
//!
//! These tests verify end-to-end encode/decode agreement and the exhaustive
//! bit-index properties of the bitset.

use wordstream::*;

#[test]
fn test_every_field_type_roundtrip() {
    let mut buf = vec![0u8; 1024];

    let address = Address([0x5a; 20]);
    let uint160 = (U256::ONE << 160).wrapping_sub(U256::from(7u8));
    let uint256 = U256::MAX.wrapping_sub(U256::ONE << 100);
    let int256 = I256::from(-123_456_789_i64);
    let selector = [0xa9, 0x05, 0x9c, 0xbb];
    let block = [0x11u8; 32];
    let payload = b"variable length payload".to_vec();

    let mut encoder = WordEncoder::new(&mut buf);
    encoder.put_address(&address).unwrap();
    encoder.put_bool(false).unwrap();
    encoder.put_uint8(u8::MAX).unwrap();
    encoder.put_uint16(0xbeef).unwrap();
    encoder.put_uint24(0xff_ffff).unwrap();
    encoder.put_uint32(0xdead_beef).unwrap();
    encoder.put_uint48(0xffff_ffff_ffff).unwrap();
    encoder.put_uint64(u64::MAX - 1).unwrap();
    encoder.put_uint128(u128::MAX / 3).unwrap();
    encoder.put_uint160(uint160).unwrap();
    encoder.put_uint256(uint256).unwrap();
    encoder.put_int256(int256).unwrap();
    encoder.put_bytes4(selector).unwrap();
    encoder.put_bytes32(block).unwrap();
    encoder.put_bytes(&payload).unwrap();
    let size = encoder.finish();

    assert_eq!(
        size,
        20 + 1 + 1 + 2 + 3 + 4 + 6 + 8 + 16 + 20 + 32 + 32 + 4 + 32 + 32 + payload.len()
    );

    let mut cursor = ByteCursor::new(&buf[..size]);
    assert_eq!(cursor.parse_address().unwrap(), address);
    assert!(!cursor.parse_bool().unwrap());
    assert_eq!(cursor.parse_uint8().unwrap(), u8::MAX);
    assert_eq!(cursor.parse_uint16().unwrap(), 0xbeef);
    assert_eq!(cursor.parse_uint24().unwrap(), 0xff_ffff);
    assert_eq!(cursor.parse_uint32().unwrap(), 0xdead_beef);
    assert_eq!(cursor.parse_uint48().unwrap(), 0xffff_ffff_ffff);
    assert_eq!(cursor.parse_uint64().unwrap(), u64::MAX - 1);
    assert_eq!(cursor.parse_uint128().unwrap(), u128::MAX / 3);
    assert_eq!(cursor.parse_uint160().unwrap(), uint160);
    assert_eq!(cursor.parse_uint256().unwrap(), uint256);
    assert_eq!(cursor.parse_int256().unwrap(), int256);
    assert_eq!(cursor.parse_bytes4().unwrap(), selector);
    assert_eq!(cursor.parse_bytes32().unwrap(), block);
    assert_eq!(cursor.parse_bytes().unwrap(), payload.as_slice());
    assert!(!cursor.is_not_empty());
    assert_eq!(cursor.position(), size);
}

#[test]
fn test_cursor_positions_advance_by_field_width() {
    let buf = vec![0u8; 200];
    let mut cursor = ByteCursor::new(&buf);

    let steps: [(usize, fn(&mut ByteCursor<'_>) -> Result<()>); 8] = [
        (20, |c| c.parse_address().map(drop)),
        (1, |c| c.parse_bool().map(drop)),
        (3, |c| c.parse_uint24().map(drop)),
        (6, |c| c.parse_uint48().map(drop)),
        (16, |c| c.parse_uint128().map(drop)),
        (20, |c| c.parse_uint160().map(drop)),
        (32, |c| c.parse_int256().map(drop)),
        (32, |c| c.parse_bytes().map(drop)),
    ];

    let mut expected = 0;
    for (width, step) in steps {
        step(&mut cursor).unwrap();
        expected += width;
        assert_eq!(cursor.position(), expected);
    }
    assert_eq!(cursor.remaining(), 200 - expected);
}

#[test]
fn test_decode_known_vector() {
    // address | uint16 | bytes(3)
    let data = hex::decode(concat!(
        "00000000000000000000000000000000000000ff",
        "0102",
        "0000000000000000000000000000000000000000000000000000000000000003",
        "abcdef"
    ))
    .unwrap();

    let mut cursor = ByteCursor::new(&data);
    let address = cursor.parse_address().unwrap();
    assert_eq!(address.to_u256(), U256::from(0xffu8));
    assert_eq!(
        address.to_string(),
        "0x00000000000000000000000000000000000000ff"
    );
    assert_eq!(cursor.parse_uint16().unwrap(), 0x0102);
    assert_eq!(cursor.parse_bytes().unwrap(), &[0xab, 0xcd, 0xef]);
    assert!(cursor.is_at_end());
}

#[test]
fn test_truncated_stream_reports_out_of_bounds() {
    let mut buf = [0u8; 64];
    let mut encoder = WordEncoder::new(&mut buf);
    encoder.put_uint48(42).unwrap();
    encoder.put_bytes(b"xyz").unwrap();
    let size = encoder.finish();

    // Drop the last payload byte.
    let mut cursor = ByteCursor::new(&buf[..size - 1]);
    assert_eq!(cursor.parse_uint48().unwrap(), 42);
    assert_eq!(cursor.parse_bytes(), Err(Error::OutOfBounds));
    assert_eq!(cursor.position(), 6);
    assert!(cursor.is_not_empty());
    assert_eq!(Error::OutOfBounds.to_string(), "read past the end of the buffer");
}

#[test]
fn test_bitset_every_power_of_two() {
    for i in 0..256 {
        let set = Bitset256::from_word(U256::ONE << i as u32);
        assert_eq!(set.find_first_set(), i);
        assert_eq!(set.find_last_set(), i);
        assert_eq!(set.count(), 1);
        assert!(set.get(i).unwrap());
        assert_eq!(Bitset256::new().set(i).unwrap(), set);
    }

    assert_eq!(Bitset256::EMPTY.find_first_set(), 256);
    assert_eq!(Bitset256::EMPTY.find_last_set(), 256);
}

#[test]
fn test_bitset_every_low_mask() {
    // 2^k - 1 for every k covers every popcount from 0 to 256.
    let mut word = U256::ZERO;
    for k in 0..=256 {
        let set = Bitset256::from_word(word);
        assert_eq!(set.count(), k);
        if k > 0 {
            assert_eq!(set.find_first_set(), 0);
            assert_eq!(set.find_last_set(), k - 1);
        }
        word = (word << 1) | U256::ONE;
    }
}

#[test]
fn test_bitset_every_high_mask() {
    let mut word = U256::ZERO;
    for k in 0..=256 {
        let set = Bitset256::from_word(word);
        assert_eq!(set.count(), k);
        if k > 0 {
            assert_eq!(set.find_first_set(), 256 - k);
            assert_eq!(set.find_last_set(), 255);
        }
        word = (word >> 1) | (U256::ONE << 255);
    }
}

#[test]
fn test_bitset_as_bitmap_in_stream() {
    let flags = Bitset256::new().set(0).unwrap().set(17).unwrap().set(255).unwrap();

    let mut buf = [0u8; 32];
    let mut encoder = WordEncoder::new(&mut buf);
    encoder.put_uint256(flags.word()).unwrap();
    encoder.finish();

    let mut cursor = ByteCursor::new(&buf);
    let decoded = Bitset256::from(cursor.parse_uint256().unwrap());
    assert_eq!(decoded, flags);
    assert_eq!(decoded.iter_ones().collect::<Vec<_>>(), vec![0, 17, 255]);
}
