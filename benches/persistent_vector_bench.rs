//! Benchmark for PersistentVector vs standard Vec.
//!
//! Compares the performance of radixvec's PersistentVector against Rust's
//! standard Vec for common operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use radixvec::PersistentVector;
use std::hint::black_box;

// =============================================================================
// push_back Benchmark
// =============================================================================

fn benchmark_push_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back");

    for size in [100, 1000, 10000] {
        // PersistentVector push_back
        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut vector = PersistentVector::new();
                    for index in 0..size {
                        vector = vector.push_back(black_box(index));
                    }
                    black_box(vector)
                });
            },
        );

        // Standard Vec push
        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark (Random Access)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let persistent: PersistentVector<usize> = (0..size).collect();
        let standard: Vec<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(persistent.get(black_box(index)));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(standard.get(black_box(index)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// update Benchmark
// =============================================================================

fn benchmark_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("update");

    for size in [100, 1000, 10000] {
        let persistent: PersistentVector<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let updated = persistent.update(black_box(size / 2), black_box(0));
                    black_box(updated)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iter Benchmark
// =============================================================================

fn benchmark_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter");

    for size in [100, 1000, 10000] {
        let persistent: PersistentVector<usize> = (0..size).collect();
        let standard: Vec<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: usize = persistent.iter().sum();
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: usize = standard.iter().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Bulk Construction Benchmark
// =============================================================================

fn benchmark_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect");

    for size in [100, 1000, 10000] {
        // Bottom-up bulk build
        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let vector: PersistentVector<usize> = (0..black_box(size)).collect();
                    black_box(vector)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let vector: Vec<usize> = (0..black_box(size)).collect();
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// pop_back Benchmark
// =============================================================================

fn benchmark_pop_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pop_back");

    for size in [100, 1000, 10000] {
        let persistent: PersistentVector<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentVector", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut vector = persistent.clone();
                    while let Some((remaining, element)) = vector.pop_back() {
                        black_box(element);
                        vector = remaining;
                    }
                    black_box(vector)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_back,
    benchmark_get,
    benchmark_update,
    benchmark_iter,
    benchmark_collect,
    benchmark_pop_back
);
criterion_main!(benches);
