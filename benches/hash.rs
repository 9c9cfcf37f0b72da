//! Criterion benchmarks for XXH32 hashing.
//!
//! Run with:
//!   cargo bench --bench hash
//!
//! Input is synthetic (see `corpus.rs`), so no data files are needed.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xxh32::{xxh32, Xxh32};

mod corpus {
    include!("corpus.rs");
}

fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxh32_oneshot");

    for &size in &[15usize, 64, 4096, 65_536, 1 << 20] {
        let data = corpus::synthetic_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("xxh32", size), &data, |b, data| {
            b.iter(|| xxh32(black_box(data), 0))
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxh32_streaming");
    let size = 1usize << 20;
    let data = corpus::synthetic_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    // Chunk sizes that are not multiples of the stripe exercise the carry.
    for &chunk in &[7usize, 16, 1000, 65_536] {
        group.bench_with_input(BenchmarkId::new("absorb_chunks", chunk), &data, |b, data| {
            b.iter(|| {
                let mut state = Xxh32::new(0);
                for part in data.chunks(chunk) {
                    state.absorb(black_box(part));
                }
                state.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming);
criterion_main!(benches);
