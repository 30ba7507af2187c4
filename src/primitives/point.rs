//! Sample points with running distance state.
//!
//! ## Purpose
//!
//! This module defines the point record the sampler works on: a fixed-size
//! coordinate array, the point's position in the caller's input, and the
//! running minimum squared distance to the set of already-selected samples.
//!
//! ## Design notes
//!
//! * **Const-generic dimension**: the coordinate count `D` is a compile-time
//!   parameter, so inner distance loops are fully unrolled per dimension.
//! * **Value semantics**: points are `Copy`; tree nodes cache a point by
//!   value so a cached view survives later mutation of the shared slab.
//! * **Squared distances**: no square roots anywhere — minimization and
//!   comparison are invariant under the squaring.
//!
//! ## Invariants
//!
//! * `dist` starts at +∞ and never increases.
//! * `pos` and `id` never change after construction.

// External dependencies
use crate::math::distance::DistanceLinalg;

// ============================================================================
// Point
// ============================================================================

/// A point in `D`-dimensional space tracked by the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T, const D: usize> {
    /// Coordinates.
    pub pos: [T; D],

    /// Position in the caller's input array.
    pub id: usize,

    /// Current minimum squared distance to any already-selected sample.
    pub dist: T,
}

impl<T: DistanceLinalg, const D: usize> Point<T, D> {
    /// Create a point with no selected sample in range yet.
    #[inline]
    pub fn new(pos: [T; D], id: usize) -> Self {
        Self {
            pos,
            id,
            dist: T::infinity(),
        }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn sq_distance(&self, other: &Self) -> T {
        T::sq_euclidean(&self.pos, &other.pos)
    }

    /// Fold a newly selected reference into the running minimum and return
    /// the (possibly lowered) distance.
    #[inline]
    pub fn update_distance(&mut self, reference: &Self) -> T {
        let d = self.sq_distance(reference);
        if d < self.dist {
            self.dist = d;
        }
        self.dist
    }
}

impl<T: DistanceLinalg, const D: usize> Default for Point<T, D> {
    fn default() -> Self {
        Self {
            pos: [T::zero(); D],
            id: 0,
            dist: T::infinity(),
        }
    }
}
