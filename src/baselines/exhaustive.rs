//! Exhaustive reference sampler.
//!
//! ## Purpose
//!
//! The textbook O(N·M·D) farthest point sampler: after every pick, refresh
//! each point's minimum squared distance against the pick, then take the
//! global argmax. No index structure, no pruning — this is the ground truth
//! the accelerated variants are measured against.

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

/// Sample `n_samples` indices from a row-major cloud, starting at
/// `start_index`. Preconditions are the caller's responsibility.
pub fn sample<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
) -> Vec<usize> {
    let n_points = data.len() / dimensions;
    let mut min_dist = vec![T::infinity(); n_points];
    let mut picks = Vec::with_capacity(n_samples);

    picks.push(start_index);
    let mut previous = start_index;

    while picks.len() < n_samples {
        let anchor = &data[previous * dimensions..(previous + 1) * dimensions];
        for (i, slot) in min_dist.iter_mut().enumerate() {
            let row = &data[i * dimensions..(i + 1) * dimensions];
            let dist = T::sq_euclidean(row, anchor);
            if dist < *slot {
                *slot = dist;
            }
        }

        let next = argmax(&min_dist);
        picks.push(next);
        previous = next;
    }

    picks
}
