use fps_rs::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cloud(n: usize, dimensions: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * dimensions).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn sq_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .fold(0.0, |acc, v| acc + v)
}

/// Check the greedy-max property: every pick after the first carries the
/// maximum minimum-distance to the picks before it.
fn assert_greedy_max(data: &[f64], dimensions: usize, picks: &[usize]) {
    let n_points = data.len() / dimensions;
    let mut min_dist = vec![f64::INFINITY; n_points];

    for (step, &pick) in picks.iter().enumerate() {
        if step > 0 {
            let max = min_dist.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            // The engine may accumulate lanewise, so allow an ulp-scale slack.
            let slack = 1e-9 * max.abs().max(1.0);
            assert!(
                min_dist[pick] >= max - slack,
                "step {}: pick {} carries {} but the farthest point carries {}",
                step,
                pick,
                min_dist[pick],
                max
            );
        }
        let anchor = &data[pick * dimensions..(pick + 1) * dimensions];
        for i in 0..n_points {
            let row = &data[i * dimensions..(i + 1) * dimensions];
            let d = sq_distance(row, anchor);
            if d < min_dist[i] {
                min_dist[i] = d;
            }
        }
    }
}

#[test]
fn test_exact_variants_agree_on_random_clouds() {
    // Random f64 coordinates never tie, so every exact variant must produce
    // the identical sequence.
    let data = random_cloud(300, 3, 11);
    let reference = sample_exhaustive(&data, 3, 40, 7).unwrap();

    assert_eq!(sample_kdtree(&data, 3, 40, 7).unwrap(), reference);
    for height in [1, 2, 5, 8] {
        assert_eq!(
            sample_kdline(&data, 3, 40, 7, height).unwrap(),
            reference,
            "height {}",
            height
        );
    }
}

#[test]
fn test_random_3d_selection_properties() {
    let data = random_cloud(1000, 3, 42);
    for (label, picks) in [
        ("kdtree", sample_kdtree(&data, 3, 50, 42).unwrap()),
        ("kdline", sample_kdline(&data, 3, 50, 42, 5).unwrap()),
    ] {
        assert_eq!(picks.len(), 50, "{}", label);
        assert_eq!(picks[0], 42, "{}", label);
        assert!(picks.iter().all(|&i| i < 1000), "{}", label);

        let mut unique = picks.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 50, "{}: duplicate pick", label);

        assert_greedy_max(&data, 3, &picks);
    }
}

#[test]
fn test_exact_variants_agree_across_dimensions() {
    for dimensions in 1..=8 {
        let data = random_cloud(120, dimensions, 100 + dimensions as u64);
        let reference = sample_exhaustive(&data, dimensions, 20, 3).unwrap();
        assert_eq!(
            sample_kdtree(&data, dimensions, 20, 3).unwrap(),
            reference,
            "kdtree, {} dims",
            dimensions
        );
        assert_eq!(
            sample_kdline(&data, dimensions, 20, 3, 4).unwrap(),
            reference,
            "kdline, {} dims",
            dimensions
        );
        assert_greedy_max(&data, dimensions, &reference);
    }
}

#[test]
fn test_exact_variants_agree_for_f32() {
    let mut rng = StdRng::seed_from_u64(23);
    let data: Vec<f32> = (0..400).map(|_| rng.gen_range(-5.0_f32..5.0)).collect();
    let reference = sample_exhaustive(&data, 2, 30, 0).unwrap();
    assert_eq!(sample_kdtree(&data, 2, 30, 0).unwrap(), reference);
    assert_eq!(sample_kdline(&data, 2, 30, 0, 6).unwrap(), reference);
}

#[test]
fn test_repeated_runs_are_identical() {
    let data = random_cloud(400, 3, 99);
    for variant in [
        SamplingVariant::KdTree,
        SamplingVariant::KdLine { height: 4 },
        SamplingVariant::Exhaustive,
        SamplingVariant::LocalWindow { window: 16 },
        SamplingVariant::NearestNeighbors { neighbors: 8 },
    ] {
        let sampler = Fps::new()
            .samples(30)
            .start_index(1)
            .variant(variant)
            .build()
            .unwrap();
        let first = sampler.sample(&data, 3).unwrap();
        let second = sampler.sample(&data, 3).unwrap();
        assert_eq!(first, second, "{:?}", variant);
    }
}

#[test]
fn test_approximate_variants_stay_well_formed() {
    let data = random_cloud(500, 3, 5);
    for (label, picks) in [
        (
            "local_window",
            sample_local_window(&data, 3, 60, 9, 32).unwrap(),
        ),
        (
            "nearest_neighbors",
            sample_nearest_neighbors(&data, 3, 60, 9, 16).unwrap(),
        ),
    ] {
        assert_eq!(picks.len(), 60, "{}", label);
        assert_eq!(picks[0], 9, "{}", label);
        assert!(picks.iter().all(|&i| i < 500), "{}", label);
    }
}

#[test]
fn test_large_neighbor_count_matches_exhaustive() {
    // With k covering the whole cloud, every round refreshes everything and
    // the nearest-neighbor sampler degenerates to the exhaustive one.
    let data = random_cloud(150, 2, 77);
    let reference = sample_exhaustive(&data, 2, 25, 4).unwrap();
    assert_eq!(
        sample_nearest_neighbors(&data, 2, 25, 4, 150).unwrap(),
        reference
    );
}

#[test]
fn test_window_covering_cloud_matches_exhaustive() {
    let data = random_cloud(100, 2, 31);
    let reference = sample_exhaustive(&data, 2, 20, 0).unwrap();
    assert_eq!(
        sample_local_window(&data, 2, 20, 0, 400).unwrap(),
        reference
    );
}
