//! In-place tree construction.
//!
//! ## Purpose
//!
//! This module builds bucket KD-trees by recursively partitioning the
//! caller's point slab in place. Leaves jointly and disjointly cover the
//! slab; every node gets a tight bounding box computed from its final
//! range.
//!
//! ## Design notes
//!
//! * **Widest-axis splits**: the split dimension is the axis of largest
//!   bounding-box span.
//! * **Mean split value**: the arithmetic mean along the split axis stands
//!   in for the median. It is cheap, and tree balance is not required for
//!   correctness, only for speed.
//! * **Edge correction**: when every coordinate lands on one side of the
//!   split value, the partition is forced to 1 vs (count − 1) so recursion
//!   always makes progress.
//! * **Child boxes are recomputed**, not inherited: a lopsided partition
//!   would otherwise leave slack that weakens pruning.
//!
//! ## Invariants
//!
//! * Construction is total for nonempty input.
//! * Bucket ranges of the finished tree partition `[0, points.len())`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::DistanceLinalg;
use crate::primitives::interval::BBox;
use crate::primitives::point::Point;
use crate::tree::node::Node;

// ============================================================================
// Entry Points
// ============================================================================

/// Build a fully recursive tree: every bucket holds exactly one point.
///
/// Reorders `points` in place. Must not be called on an empty slab.
pub fn build_tree<T: DistanceLinalg, const D: usize>(points: &mut [Point<T, D>]) -> Node<T, D> {
    debug_assert!(!points.is_empty());
    let len = points.len();
    let bbox = BBox::from_points(points);
    divide(points, 0, len, bbox)
}

/// Build a fixed-height tree and return only its buckets, in left-to-right
/// order. Subdivision stops at `height` or when a single point remains.
///
/// The internal structure above the buckets is never consulted again, so it
/// is not materialized.
pub fn build_buckets<T: DistanceLinalg, const D: usize>(
    points: &mut [Point<T, D>],
    height: usize,
) -> Vec<Node<T, D>> {
    debug_assert!(!points.is_empty());
    let len = points.len();
    let bbox = BBox::from_points(points);
    let mut buckets = Vec::new();
    divide_leveled(points, 0, len, bbox, 0, height, &mut buckets);
    buckets
}

// ============================================================================
// Recursion
// ============================================================================

fn divide<T: DistanceLinalg, const D: usize>(
    points: &mut [Point<T, D>],
    left: usize,
    right: usize,
    bbox: BBox<T, D>,
) -> Node<T, D> {
    if right - left == 1 {
        return Node::bucket(bbox, left, right);
    }
    let (split, left_box, right_box) = split_range(points, left, right, &bbox);
    let left_child = divide(points, left, split, left_box);
    let right_child = divide(points, split, right, right_box);
    Node::split(bbox, left_child, right_child)
}

#[allow(clippy::too_many_arguments)]
fn divide_leveled<T: DistanceLinalg, const D: usize>(
    points: &mut [Point<T, D>],
    left: usize,
    right: usize,
    bbox: BBox<T, D>,
    depth: usize,
    height: usize,
    buckets: &mut Vec<Node<T, D>>,
) {
    if depth == height || right - left == 1 {
        buckets.push(Node::bucket(bbox, left, right));
        return;
    }
    let (split, left_box, right_box) = split_range(points, left, right, &bbox);
    divide_leveled(points, left, split, left_box, depth + 1, height, buckets);
    divide_leveled(points, split, right, right_box, depth + 1, height, buckets);
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition `points[left..right]` on the widest axis of `bbox` and return
/// the split index together with the children's recomputed boxes.
fn split_range<T: DistanceLinalg, const D: usize>(
    points: &mut [Point<T, D>],
    left: usize,
    right: usize,
    bbox: &BBox<T, D>,
) -> (usize, BBox<T, D>, BBox<T, D>) {
    let dim = bbox.widest_axis();
    let value = mean_along(points, left, right, dim);
    let split = left + plane_split(points, left, right, dim, value);
    let left_box = BBox::from_points(&points[left..split]);
    let right_box = BBox::from_points(&points[split..right]);
    (split, left_box, right_box)
}

/// Mean coordinate along `dim` over `points[left..right]`.
fn mean_along<T: DistanceLinalg, const D: usize>(
    points: &[Point<T, D>],
    left: usize,
    right: usize,
    dim: usize,
) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for point in &points[left..right] {
        sum = sum + point.pos[dim];
        count = count + T::one();
    }
    sum / count
}

/// Two-pointer in-place partition: coordinates `< value` on `dim` move to
/// the front of the range. Returns the number of points on the left side,
/// forced to 1 or count − 1 when the partition would leave a side empty.
fn plane_split<T: DistanceLinalg, const D: usize>(
    points: &mut [Point<T, D>],
    left: usize,
    right: usize,
    dim: usize,
    value: T,
) -> usize {
    let mut start = left;
    let mut end = right;

    loop {
        while start < end && points[start].pos[dim] < value {
            start += 1;
        }
        while start < end && points[end - 1].pos[dim] >= value {
            end -= 1;
        }
        if start >= end {
            break;
        }
        points.swap(start, end - 1);
        start += 1;
        end -= 1;
    }

    if start == left {
        1
    } else if start == right {
        right - left - 1
    } else {
        start - left
    }
}
