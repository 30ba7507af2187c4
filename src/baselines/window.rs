//! Local-window update sampler.
//!
//! ## Purpose
//!
//! A cheap approximation of exhaustive sampling for clouds whose row order
//! correlates with spatial locality (scan lines, space-filling curves):
//! after each pick, only the indices inside a window of `window` rows
//! centered on the pick get their distances refreshed. The argmax stays
//! global, so selection still ranges over the whole cloud.
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

/// Sample `n_samples` indices, refreshing only a `window`-row neighborhood
/// of each pick. Preconditions are the caller's responsibility.
pub fn sample<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    window: usize,
    start_index: usize,
) -> Vec<usize> {
    let n_points = data.len() / dimensions;
    let mut min_dist = vec![T::infinity(); n_points];
    let mut picks = Vec::with_capacity(n_samples);

    update_range(data, dimensions, &mut min_dist, start_index, 0, n_points);
    picks.push(start_index);
    let mut previous = start_index;

    while picks.len() < n_samples {
        let (lo, hi) = clamp_window(previous, window, n_points);
        update_range(data, dimensions, &mut min_dist, previous, lo, hi);

        let next = argmax(&min_dist);
        picks.push(next);
        previous = next;
    }

    picks
}

/// Refresh `min_dist[lo..hi]` against the anchor row.
fn update_range<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    min_dist: &mut [T],
    anchor: usize,
    lo: usize,
    hi: usize,
) {
    let anchor_row = &data[anchor * dimensions..(anchor + 1) * dimensions];
    for (i, slot) in min_dist[lo..hi].iter_mut().enumerate() {
        let row_index = lo + i;
        let row = &data[row_index * dimensions..(row_index + 1) * dimensions];
        let dist = T::sq_euclidean(row, anchor_row);
        if dist < *slot {
            *slot = dist;
        }
    }
}

/// Half-open window of about `window` rows around `center`, shifted (not
/// truncated) where it runs off either end of the array.
fn clamp_window(center: usize, window: usize, n_points: usize) -> (usize, usize) {
    let half = (window / 2) as isize;
    let n = n_points as isize;
    let mut start = center as isize - half;
    let mut end = center as isize + half;
    if start < 0 {
        end -= start;
        start = 0;
    }
    if end >= n {
        start = (start - (end - n + 1)).max(0);
        end = n - 1;
    }
    (start as usize, end as usize + 1)
}
