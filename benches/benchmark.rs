use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fps_rs::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cloud(n: usize, dimensions: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * dimensions)
        .map(|_| rng.gen_range(-1.0_f32..1.0))
        .collect()
}

fn bench_variants(c: &mut Criterion) {
    let data = random_cloud(8192, 3, 7);
    let n_samples = 512;

    let mut group = c.benchmark_group("fps_8192_to_512_3d");
    group.bench_function("exhaustive", |b| {
        b.iter(|| sample_exhaustive(black_box(&data), 3, n_samples, 0).unwrap())
    });
    group.bench_function("kdtree", |b| {
        b.iter(|| sample_kdtree(black_box(&data), 3, n_samples, 0).unwrap())
    });
    group.bench_function("kdline_h6", |b| {
        b.iter(|| sample_kdline(black_box(&data), 3, n_samples, 0, 6).unwrap())
    });
    group.bench_function("local_window_w64", |b| {
        b.iter(|| sample_local_window(black_box(&data), 3, n_samples, 0, 64).unwrap())
    });
    group.bench_function("nearest_neighbors_k64", |b| {
        b.iter(|| sample_nearest_neighbors(black_box(&data), 3, n_samples, 0, 64).unwrap())
    });
    group.finish();
}

fn bench_sample_counts(c: &mut Criterion) {
    let data = random_cloud(16384, 3, 11);

    let mut group = c.benchmark_group("kdline_16384_3d");
    for n_samples in [128, 1024, 4096] {
        group.bench_function(format!("m_{}", n_samples), |b| {
            b.iter(|| sample_kdline(black_box(&data), 3, n_samples, 0, 7).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants, bench_sample_counts);
criterion_main!(benches);
