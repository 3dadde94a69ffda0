//! LZW benchmarks: throughput per data pattern and per code width.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzkit_lzw::{LzwConfig, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes the same (best case).
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// LCG output, no structure (worst case).
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repeated English sentences.
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZE: usize = 256 * 1024;

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text", test_data::text_like),
];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_compress");
    group.throughput(Throughput::Bytes(SIZE as u64));

    for (name, generator) in PATTERNS {
        let data = generator(SIZE);
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| compress(black_box(data), LzwConfig::DEFAULT).unwrap());
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_decompress");
    group.throughput(Throughput::Bytes(SIZE as u64));

    for (name, generator) in PATTERNS {
        let compressed = compress(&generator(SIZE), LzwConfig::DEFAULT).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| decompress(black_box(compressed), LzwConfig::DEFAULT).unwrap());
            },
        );
    }

    group.finish();
}

/// Wider codes mean a bigger dictionary and longer matches.
fn bench_code_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_code_width");
    group.throughput(Throughput::Bytes(SIZE as u64));

    let data = test_data::text_like(SIZE);
    for width in [10u8, 12, 15, 18] {
        let config = LzwConfig::new(width).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(width), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data), config).unwrap();
                decompress(&compressed, config).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_code_width);
criterion_main!(benches);
