//! Tree nodes and the pruning update.
//!
//! ## Purpose
//!
//! This module implements the per-node state of the bucket KD-tree and the
//! two operations the sampler drives it with: seeding every point's distance
//! against the initial reference, and folding newly selected references into
//! the tree while skipping subtrees they cannot affect.
//!
//! ## Key concepts
//!
//! * **Champion**: each node caches a value copy of the point with the
//!   largest current `dist` in its subtree. Sampling only ever reads
//!   champions, which is what makes deferral sound.
//! * **Pending queue**: references delivered to a node but not yet applied.
//!   Drained in FIFO order; the order is observable through tie-breaking.
//! * **Deferred queue**: references that provably cannot dethrone this
//!   node's champion but might still lower some other point in the subtree.
//!   They are replayed into both children the moment a reference forces a
//!   descent, so the recomputed champion reflects every selection so far.
//!
//! ## Invariants
//!
//! * After `seed` or `update`, a node's champion carries the largest `dist`
//!   of any point in its subtree, and the champion's `dist` is exact with
//!   respect to all references applied or deferred anywhere above it.
//! * Comparisons are strict (`>`, `<`): an equal distance neither prunes
//!   nor descends differently than stated, and the left child keeps the
//!   champion slot on ties.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::DistanceLinalg;
use crate::primitives::interval::BBox;
use crate::primitives::point::Point;

// ============================================================================
// Node
// ============================================================================

/// Children of a tree node: either a split into two owned subtrees or a
/// contiguous bucket of the shared point slab.
#[derive(Debug, Clone)]
pub enum Children<T, const D: usize> {
    /// An internal node owning its two halves.
    Split {
        /// Points below the split value on the chosen axis.
        left: Box<Node<T, D>>,
        /// Points at or above the split value.
        right: Box<Node<T, D>>,
    },

    /// A leaf owning the slab range `[start, end)`.
    Bucket {
        /// First slab index covered by this bucket.
        start: usize,
        /// One past the last slab index covered.
        end: usize,
    },
}

/// A bucket KD-tree node.
#[derive(Debug, Clone)]
pub struct Node<T, const D: usize> {
    /// Tight bounds over the node's points, fixed at build time.
    pub bbox: BBox<T, D>,

    /// Value copy of the subtree point with the largest current `dist`.
    pub farthest: Point<T, D>,

    /// References delivered but not yet applied (FIFO).
    pub pending: Vec<Point<T, D>>,

    /// References postponed because they cannot change this champion.
    pub deferred: Vec<Point<T, D>>,

    /// Subtrees or bucket range.
    pub children: Children<T, D>,
}

impl<T: DistanceLinalg, const D: usize> Node<T, D> {
    /// Leaf node over the slab range `[start, end)`.
    pub fn bucket(bbox: BBox<T, D>, start: usize, end: usize) -> Self {
        Self {
            bbox,
            farthest: Point::default(),
            pending: Vec::new(),
            deferred: Vec::new(),
            children: Children::Bucket { start, end },
        }
    }

    /// Internal node owning two children.
    pub fn split(bbox: BBox<T, D>, left: Node<T, D>, right: Node<T, D>) -> Self {
        Self {
            bbox,
            farthest: Point::default(),
            pending: Vec::new(),
            deferred: Vec::new(),
            children: Children::Split {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Number of points in the subtree.
    pub fn count(&self) -> usize {
        match &self.children {
            Children::Split { left, right } => left.count() + right.count(),
            Children::Bucket { start, end } => end - start,
        }
    }

    /// Apply the initial reference to every point in the subtree and
    /// establish the champion caches bottom-up.
    pub fn seed(&mut self, points: &mut [Point<T, D>], reference: &Point<T, D>) {
        self.pending.clear();
        self.deferred.clear();
        match &mut self.children {
            Children::Split { left, right } => {
                left.seed(points, reference);
                right.seed(points, reference);
                self.farthest = champion(&left.farthest, &right.farthest);
            }
            Children::Bucket { start, end } => {
                let mut best = T::neg_infinity();
                for point in &mut points[*start..*end] {
                    let dist = point.update_distance(reference);
                    if dist > best {
                        best = dist;
                        self.farthest = *point;
                    }
                }
            }
        }
    }

    /// Drain the pending queue, applying or deferring each reference.
    ///
    /// For each reference, compare its squared distance to the cached
    /// champion against the champion's own `dist`:
    ///
    /// * Farther away: the champion stands. If the reference is also at
    ///   least `dist` away from the whole bounding box it can be dropped;
    ///   otherwise it is deferred until the champion changes.
    /// * Close enough to matter: descend. An internal node first replays
    ///   every deferred reference into both children, then forwards the new
    ///   one and refreshes its champion from theirs; a leaf replays its
    ///   deferrals over the bucket and rescans for the champion.
    pub fn update(&mut self, points: &mut [Point<T, D>]) {
        for i in 0..self.pending.len() {
            let reference = self.pending[i];
            let current_max = self.farthest.dist;
            let to_champion = self.farthest.sq_distance(&reference);
            if to_champion > current_max {
                if self.bbox.sq_distance_to(&reference.pos) < current_max {
                    self.deferred.push(reference);
                }
            } else {
                match &mut self.children {
                    Children::Split { left, right } => {
                        for deferred in self.deferred.drain(..) {
                            left.pending.push(deferred);
                            right.pending.push(deferred);
                        }
                        left.pending.push(reference);
                        left.update(points);
                        right.pending.push(reference);
                        right.update(points);
                        self.farthest = champion(&left.farthest, &right.farthest);
                    }
                    Children::Bucket { start, end } => {
                        self.deferred.push(reference);
                        for j in 0..self.deferred.len() {
                            let deferred = self.deferred[j];
                            let mut best = T::neg_infinity();
                            for point in &mut points[*start..*end] {
                                let dist = point.update_distance(&deferred);
                                if dist > best {
                                    best = dist;
                                    self.farthest = *point;
                                }
                            }
                        }
                        self.deferred.clear();
                    }
                }
            }
        }
        self.pending.clear();
    }
}

/// Pick the champion of two subtree champions; the left one keeps the slot
/// on equal distances.
#[inline]
fn champion<T: DistanceLinalg, const D: usize>(
    left: &Point<T, D>,
    right: &Point<T, D>,
) -> Point<T, D> {
    if right.dist > left.dist {
        *right
    } else {
        *left
    }
}
