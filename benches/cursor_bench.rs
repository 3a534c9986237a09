//! Criterion benchmarks for the cursor and encoder
//!
//! Run with: cargo bench --bench cursor_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wordstream::{Address, ByteCursor, WordEncoder, U256};

/// address | uint24 | uint48 | uint256 | bytes(len)
fn encode_record(buf: &mut [u8], payload: &[u8]) -> usize {
    let mut encoder = WordEncoder::new(buf);
    encoder.put_address(&Address([0x42; 20])).unwrap();
    encoder.put_uint24(0x00ab_cdef).unwrap();
    encoder.put_uint48(1_700_000_000_000).unwrap();
    encoder.put_uint256(U256::MAX).unwrap();
    encoder.put_bytes(payload).unwrap();
    encoder.finish()
}

fn bench_encode(c: &mut Criterion) {
    let mut buf = vec![0u8; 1024];
    let payload = [0x5au8; 64];

    c.bench_function("record_encode", |b| {
        b.iter(|| {
            let size = encode_record(black_box(&mut buf), black_box(&payload));
            black_box(size);
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut buf = vec![0u8; 1024];
    let payload = [0x5au8; 64];
    let size = encode_record(&mut buf, &payload);
    let record = buf[..size].to_vec();

    c.bench_function("record_decode", |b| {
        b.iter(|| {
            let mut cursor = ByteCursor::new(black_box(&record));
            let address = cursor.parse_address().unwrap();
            let a = cursor.parse_uint24().unwrap();
            let ts = cursor.parse_uint48().unwrap();
            let amount = cursor.parse_uint256().unwrap();
            let bytes = cursor.parse_bytes().unwrap();
            black_box((address, a, ts, amount, bytes));
        });
    });
}

fn bench_word_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("uint256_stream");

    for count in [1usize, 16, 256] {
        let mut buf = vec![0u8; count * 32];
        let mut encoder = WordEncoder::new(&mut buf);
        for i in 0..count {
            encoder.put_uint256(U256::from(i as u64)).unwrap();
        }
        encoder.finish();

        group.bench_with_input(BenchmarkId::from_parameter(count), &buf, |b, buf| {
            b.iter(|| {
                let mut cursor = ByteCursor::new(black_box(buf));
                while cursor.is_not_empty() {
                    black_box(cursor.parse_uint256().unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_word_stream);
criterion_main!(benches);
