//! Benchmark dispatched counting against the scalar reference.
//!
//! Run with: `cargo bench --bench count_benchmark`

#![allow(clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanecount_core::count;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn generate_i32(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(0..16)).collect()
}

fn generate_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(b'a'..=b'p')).collect()
}

fn generate_f32(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| f32::from(rng.gen_range(0_u8..16))).collect()
}

/// Warmup function to stabilize CPU frequency and caches
fn warmup<F: Fn()>(f: F) {
    for _ in 0..3 {
        f();
    }
}

fn bench_count_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_i32");

    for len in &[1_000, 16_000, 256_000, 1_000_000] {
        let data = generate_i32(*len);

        group.bench_with_input(BenchmarkId::new("dispatched", len), len, |bencher, _| {
            warmup(|| {
                let _ = count(&data, &7);
            });
            bencher.iter(|| count(black_box(&data), black_box(&7)));
        });

        group.bench_with_input(BenchmarkId::new("scalar", len), len, |bencher, _| {
            warmup(|| {
                let _ = data.iter().filter(|&&x| x == 7).count();
            });
            bencher.iter(|| black_box(&data).iter().filter(|&&x| x == 7).count());
        });
    }

    group.finish();
}

fn bench_count_u8(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_u8");

    for len in &[1_000, 16_000, 256_000, 1_000_000] {
        let data = generate_bytes(*len);

        group.bench_with_input(BenchmarkId::new("dispatched", len), len, |bencher, _| {
            warmup(|| {
                let _ = count(&data, &b'b');
            });
            bencher.iter(|| count(black_box(&data), black_box(&b'b')));
        });

        group.bench_with_input(BenchmarkId::new("scalar", len), len, |bencher, _| {
            warmup(|| {
                let _ = data.iter().filter(|&&x| x == b'b').count();
            });
            bencher.iter(|| black_box(&data).iter().filter(|&&x| x == b'b').count());
        });
    }

    group.finish();
}

fn bench_count_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_f32");

    for len in &[1_000, 16_000, 256_000, 1_000_000] {
        let data = generate_f32(*len);

        group.bench_with_input(BenchmarkId::new("dispatched", len), len, |bencher, _| {
            warmup(|| {
                let _ = count(&data, &7.0);
            });
            bencher.iter(|| count(black_box(&data), black_box(&7.0)));
        });

        group.bench_with_input(BenchmarkId::new("scalar", len), len, |bencher, _| {
            warmup(|| {
                let _ = data.iter().filter(|&&x| x == 7.0).count();
            });
            bencher.iter(|| black_box(&data).iter().filter(|&&x| x == 7.0).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count_i32, bench_count_u8, bench_count_f32);
criterion_main!(benches);
