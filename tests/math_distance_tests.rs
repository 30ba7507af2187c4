#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use fps_rs::internals::math::distance::{simd, DistanceLinalg};
use fps_rs::internals::math::neighborhood::NeighborTree;

// ============================================================================
// Squared Euclidean Distance Tests
// ============================================================================

#[test]
fn test_sq_euclidean_1d() {
    assert_relative_eq!(f64::sq_euclidean(&[1.0], &[4.0]), 9.0);
}

#[test]
fn test_sq_euclidean_2d() {
    assert_relative_eq!(f64::sq_euclidean(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
}

#[test]
fn test_sq_euclidean_3d() {
    // diffs: 3, 4, 5 -> 9 + 16 + 25
    assert_relative_eq!(
        f64::sq_euclidean(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0]),
        50.0
    );
}

#[test]
fn test_sq_euclidean_identical_points() {
    let a = [0.25, -1.5, 3.75, 8.0, -2.25];
    assert_eq!(f64::sq_euclidean(&a, &a), 0.0);
}

#[test]
fn test_f32_kernel_matches_f64_reference() {
    let a32 = [1.5f32, -2.0, 0.25, 4.0, -1.0, 2.5, 3.0, -0.5];
    let b32 = [0.5f32, 1.0, -0.75, 2.0, 1.0, -2.5, 1.0, 0.5];
    let expected: f32 = a32
        .iter()
        .zip(b32.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum();
    assert_relative_eq!(f32::sq_euclidean(&a32, &b32), expected, epsilon = 1e-4);
}

#[test]
fn test_simd_agrees_with_scalar_across_lengths() {
    for n in 1..=16 {
        let a: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() * 5.0).collect();
        let b: Vec<f64> = (0..n).map(|i| (i as f64 * 1.3).cos() * 3.0).collect();
        assert_relative_eq!(
            simd::sq_euclidean_f64(&a, &b),
            simd::sq_euclidean_scalar(&a, &b),
            max_relative = 1e-12
        );
    }
}

// ============================================================================
// Nearest-Neighbor Tree Tests
// ============================================================================

#[test]
fn test_k_nearest_finds_exact_neighbors() {
    // 1D cloud at 0, 1, ..., 9.
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let tree = NeighborTree::new(&data, 1);

    let hood = tree.k_nearest(&[3.2], 3);
    assert_eq!(hood.len(), 3);
    assert_eq!(hood.indices, vec![3, 4, 2]);
    assert_relative_eq!(hood.distances[0], 0.04, max_relative = 1e-9);
}

#[test]
fn test_k_nearest_matches_brute_force() {
    let data: Vec<f64> = (0..60)
        .map(|i| ((i as f64 * 12.9898).sin() * 43758.5453).fract() * 10.0)
        .collect();
    let dims = 2;
    let n = data.len() / dims;
    let tree = NeighborTree::new(&data, dims);

    for probe in 0..n {
        let query = &data[probe * dims..(probe + 1) * dims];
        let hood = tree.k_nearest(query, 5);

        let mut brute: Vec<(usize, f64)> = (0..n)
            .map(|i| {
                let row = &data[i * dims..(i + 1) * dims];
                (i, f64::sq_euclidean(row, query))
            })
            .collect();
        brute.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

        let mut expected: Vec<f64> = brute[..5].iter().map(|&(_, d)| d).collect();
        let mut got: Vec<f64> = hood.distances.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        got.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (e, g) in expected.iter().zip(got.iter()) {
            assert_relative_eq!(*e, *g, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_k_larger_than_cloud_returns_everything() {
    let data = [0.0, 1.0, 2.0];
    let tree = NeighborTree::new(&data, 1);
    let hood = tree.k_nearest(&[1.0], 10);
    assert_eq!(hood.len(), 3);
    assert!(!hood.is_empty());
}

#[test]
fn test_zero_k_returns_nothing() {
    let data = [0.0, 1.0, 2.0];
    let tree = NeighborTree::new(&data, 1);
    assert!(tree.k_nearest(&[1.0], 0).is_empty());
}
