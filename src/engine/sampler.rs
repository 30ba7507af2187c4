//! Greedy selection loop and dimension dispatch.
//!
//! ## Purpose
//!
//! This module runs the iterative farthest-point loop over a spatial index:
//! seed with the start point, then repeatedly read the global champion,
//! record its index, and feed it back into the index as a new reference.
//! It also bridges the runtime dimension count onto the monomorphized
//! per-dimension code paths.
//!
//! ## Design notes
//!
//! * **Monomorphization**: the tree code is compiled once per dimension in
//!   `1..=MAX_DIMENSIONS`; an exhaustive `match` selects the path at run
//!   time. Inner distance loops are unrolled per dimension.
//! * **Single-threaded**: every call runs to completion on the calling
//!   thread; all allocation happens while loading the slab and building
//!   the tree.
//!
//! ## Invariants
//!
//! * The first emitted index is the start index, even though construction
//!   reorders the slab (the seed is captured from the raw rows first).
//! * Emitted indices address the caller's original row order.
//!
//! ## Non-goals
//!
//! * This module does not validate input (see `validator`); callers must
//!   have checked the dimension ceiling before dispatching.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::DistanceLinalg;
use crate::primitives::point::Point;
use crate::tree::kdtree::KdTree;
use crate::tree::line::KdLineTree;
use crate::tree::FpsTree;

// ============================================================================
// Constants and Shapes
// ============================================================================

/// Largest dimension count the bucket-accelerated variants are compiled for.
pub const MAX_DIMENSIONS: usize = 8;

/// Shape of the bucket tree driving a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeShape {
    /// Fully recursive subdivision down to single-point buckets.
    Recursive,

    /// Subdivision cut off at the given height, queried as a flat bucket
    /// list.
    Leveled(usize),
}

// ============================================================================
// Selection Loop
// ============================================================================

/// Run greedy farthest-point selection over a spatial index.
///
/// Emits `n_samples` original-row indices, starting with the seed's.
pub fn select<T, const D: usize, I>(
    index: &mut I,
    points: &mut [Point<T, D>],
    n_samples: usize,
    seed: Point<T, D>,
) -> Vec<usize>
where
    T: DistanceLinalg,
    I: FpsTree<T, D>,
{
    let mut picks = Vec::with_capacity(n_samples);

    index.seed(points, &seed);
    picks.push(seed.id);

    for _ in 1..n_samples {
        let next = index.farthest();
        picks.push(next.id);
        index.push_reference(points, &next);
    }

    picks
}

// ============================================================================
// Dimension Dispatch
// ============================================================================

/// Copy the row-major slab into sampler points.
///
/// Construction reorders the resulting vector; `Point::id` keeps the
/// original row.
fn load_points<T: DistanceLinalg, const D: usize>(data: &[T]) -> Vec<Point<T, D>> {
    data.chunks_exact(D)
        .enumerate()
        .map(|(id, row)| Point::new(core::array::from_fn(|axis| row[axis]), id))
        .collect()
}

fn run<T: DistanceLinalg, const D: usize>(
    data: &[T],
    n_samples: usize,
    start_index: usize,
    shape: TreeShape,
) -> Vec<usize> {
    let mut points = load_points::<T, D>(data);
    // Capture the seed before construction shuffles the slab.
    let seed = points[start_index];
    match shape {
        TreeShape::Recursive => {
            let mut tree = KdTree::build(&mut points);
            select(&mut tree, &mut points, n_samples, seed)
        }
        TreeShape::Leveled(height) => {
            let mut tree = KdLineTree::build(&mut points, height);
            select(&mut tree, &mut points, n_samples, seed)
        }
    }
}

/// Dispatch the runtime dimension count onto a monomorphized run.
///
/// The dimension ceiling must already have been validated.
pub fn sample_bucket<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
    shape: TreeShape,
) -> Vec<usize> {
    match dimensions {
        1 => run::<T, 1>(data, n_samples, start_index, shape),
        2 => run::<T, 2>(data, n_samples, start_index, shape),
        3 => run::<T, 3>(data, n_samples, start_index, shape),
        4 => run::<T, 4>(data, n_samples, start_index, shape),
        5 => run::<T, 5>(data, n_samples, start_index, shape),
        6 => run::<T, 6>(data, n_samples, start_index, shape),
        7 => run::<T, 7>(data, n_samples, start_index, shape),
        8 => run::<T, 8>(data, n_samples, start_index, shape),
        _ => unreachable!("dimension count is checked before dispatch"),
    }
}
