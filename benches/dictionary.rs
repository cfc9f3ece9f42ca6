//! Criterion benchmarks for the dictionary compressor/decompressor.
//!
//! Run with:
//!   cargo bench --bench dictionary

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use makocode::dictionary::{compress, decompress};

const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
    Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi \
    ut aliquip ex ea commodo consequat. ";

fn synthetic_text(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let take = (size - out.len()).min(LOREM.len());
        out.extend_from_slice(&LOREM[..take]);
    }
    out
}

fn bench_dictionary_compress_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_compress_decompress");

    for &size in &[4_096usize, 65_536, 262_144] {
        let input = synthetic_text(size);
        let payload = makocode::rng::generate(0xC0FFEE ^ size as u64, size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("compress_repetitive", size), &input, |b, input| {
            b.iter(|| compress(input).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("compress_random", size), &payload, |b, payload| {
            b.iter(|| compress(payload).unwrap())
        });

        let compressed = compress(&input).unwrap();
        let bit_len = (compressed.len() as u64) * 8;
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("decompress_repetitive", size), &compressed, |b, compressed| {
            b.iter(|| decompress(compressed, bit_len).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dictionary_compress_decompress);
criterion_main!(benches);
