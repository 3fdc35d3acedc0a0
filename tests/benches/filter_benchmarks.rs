//! # Bloom Filter Benchmarks
//!
//! | Operation | Parameters |
//! |-----------|------------|
//! | add | optimal(n, 0.01) for n in 1k, 10k, 100k |
//! | contains (hit) | same filters, inserted elements |
//! | contains (miss) | same filters, absent elements |
//! | parameter derivation | optimal(n, p) |

use bloom_core::{calculate_optimal_parameters, BloomFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn elements(count: usize, prefix: &str) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..count)
        .map(|_| format!("{prefix}-{:016x}", rng.gen::<u64>()))
        .collect()
}

fn filled_filter(items: &[String]) -> BloomFilter {
    let mut filter = BloomFilter::optimal(items.len(), 0.01).expect("valid parameters");
    for item in items {
        filter.add(item).expect("strings always encode");
    }
    filter
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-add");

    for size in SIZES {
        let items = elements(size, "in");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("add", size), &items, |b, items| {
            b.iter(|| black_box(filled_filter(items)))
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-contains");

    for size in SIZES {
        let present = elements(size, "in");
        let absent = elements(size, "out");
        let filter = filled_filter(&present);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("hit", size), &present, |b, items| {
            b.iter(|| {
                items
                    .iter()
                    .filter(|item| filter.contains_bytes(item.as_bytes()))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &absent, |b, items| {
            b.iter(|| {
                items
                    .iter()
                    .filter(|item| filter.contains_bytes(item.as_bytes()))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_parameters(c: &mut Criterion) {
    c.bench_function("optimal-parameters", |b| {
        b.iter(|| calculate_optimal_parameters(black_box(100_000), black_box(0.001)))
    });
}

criterion_group!(benches, bench_add, bench_contains, bench_parameters);
criterion_main!(benches);
