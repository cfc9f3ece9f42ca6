//! Criterion benchmarks for the full encode/decode path across page sizes
//! and color modes.
//!
//! Run with:
//!   cargo bench --bench frame

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use makocode::{decode, encode, rng, ColorMode, PageGeometry};

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode_roundtrip");

    for &(width, height) in &[(256u32, 256u32), (1024, 1024)] {
        for mode in [ColorMode::Gray, ColorMode::CmyWhite, ColorMode::RgbCmyWhiteBlack] {
            let geometry = PageGeometry::new(width, height, 0);
            let cap = geometry.capacity_bits(mode).unwrap();
            let payload_len = (cap / 16) as usize; // well within a single page
            let payload = rng::generate((mode.as_u8() as u64) << 32, payload_len);

            let label = format!("{width}x{height}/{mode:?}");
            group.throughput(Throughput::Bytes(payload_len as u64));
            group.bench_with_input(BenchmarkId::new("encode", &label), &payload, |b, payload| {
                b.iter(|| encode(payload, mode, geometry, None).unwrap())
            });

            let pages = encode(&payload, mode, geometry, None).unwrap();
            group.bench_with_input(BenchmarkId::new("decode", &label), &pages, |b, pages| {
                b.iter(|| decode(pages, Some(mode)).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode);
criterion_main!(benches);
