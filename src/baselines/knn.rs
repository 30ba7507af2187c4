//! Nearest-neighbor update sampler.
//!
//! ## Purpose
//!
//! Like the local-window sampler, but the refreshed neighborhood is
//! geometric instead of positional: after each pick, a static KD-tree
//! returns the pick's `k` nearest points and only those get their
//! distances refreshed. The argmax stays global.
//!
//! The first round refreshes every point against the start pick so no slot
//! is left at infinity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::baselines::argmax;
use crate::math::distance::DistanceLinalg;
use crate::math::neighborhood::NeighborTree;

/// Sample `n_samples` indices, refreshing only the `neighbors` nearest
/// points of each pick. Preconditions are the caller's responsibility.
pub fn sample<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    neighbors: usize,
    start_index: usize,
) -> Vec<usize> {
    let n_points = data.len() / dimensions;
    let tree = NeighborTree::new(data, dimensions);
    let k = neighbors.min(n_points);

    let mut min_dist = vec![T::infinity(); n_points];
    let mut picks = Vec::with_capacity(n_samples);

    let start_row = &data[start_index * dimensions..(start_index + 1) * dimensions];
    for (i, slot) in min_dist.iter_mut().enumerate() {
        let row = &data[i * dimensions..(i + 1) * dimensions];
        let dist = T::sq_euclidean(row, start_row);
        if dist < *slot {
            *slot = dist;
        }
    }
    picks.push(start_index);
    let mut previous = start_index;

    while picks.len() < n_samples {
        let query = &data[previous * dimensions..(previous + 1) * dimensions];
        let hood = tree.k_nearest(query, k);
        for (&index, &dist) in hood.indices.iter().zip(hood.distances.iter()) {
            if dist < min_dist[index] {
                min_dist[index] = dist;
            }
        }

        let next = argmax(&min_dist);
        picks.push(next);
        previous = next;
    }

    picks
}
