//! Static KD-tree for k-nearest-neighbor search.
//!
//! ## Purpose
//!
//! This module implements a classic one-point-per-node KD-tree for exact
//! k-nearest-neighbor queries over a flattened row-major cloud. The
//! nearest-neighbor sampling baseline uses it to limit distance updates to
//! the vicinity of the previous pick.
//!
//! ## Design notes
//!
//! * **Static construction**: built once over the whole cloud, then only
//!   queried. No insertions or deletions.
//! * **Flattened representation**: nodes live in a linear vector and link
//!   by index.
//! * **Cycled axes**: the splitting dimension cycles with depth; the median
//!   is found by sorting the index range on that axis.
//!
//! ## Invariants
//!
//! * Queries return exact neighbors (no approximation).
//! * Returned distances are squared Euclidean, ascending.
//!
//! ## Non-goals
//!
//! * This is not the bucket tree that accelerates the core sampler; see the
//!   `tree` layer for that.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;

// Internal dependencies
use crate::math::distance::DistanceLinalg;

// ============================================================================
// Neighborhood
// ============================================================================

/// Result of a k-nearest-neighbor query.
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    /// Indices of the nearest neighbors, sorted by distance ascending.
    pub indices: Vec<usize>,

    /// Squared distances to each neighbor, same order as `indices`.
    pub distances: Vec<T>,
}

impl<T> Neighborhood<T> {
    /// Number of neighbors found.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the query found nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// ============================================================================
// NeighborTree
// ============================================================================

/// A node in the nearest-neighbor tree.
#[derive(Debug, Clone)]
struct TreeNode<T> {
    /// Index of the point in the original flattened data array.
    index: usize,
    /// Left child slot in the nodes vector.
    left: Option<usize>,
    /// Right child slot in the nodes vector.
    right: Option<usize>,
    /// Splitting dimension.
    split_dim: usize,
    /// Point coordinates, cached for distance checks.
    point: Vec<T>,
}

/// Static KD-tree over a flattened row-major point cloud.
#[derive(Debug, Clone)]
pub struct NeighborTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T: DistanceLinalg> NeighborTree<T> {
    /// Build a tree over `points` (row-major, `dimensions` coordinates per
    /// point).
    pub fn new(points: &[T], dimensions: usize) -> Self {
        let n = points.len() / dimensions;
        let mut indices: Vec<usize> = (0..n).collect();
        let mut nodes = Vec::with_capacity(n);

        let root = Self::build_recursive(points, dimensions, &mut indices, 0, &mut nodes);

        Self { nodes, root }
    }

    /// Find the `k` nearest neighbors of `query` (the query point itself
    /// counts if it is part of the cloud).
    pub fn k_nearest(&self, query: &[T], k: usize) -> Neighborhood<T> {
        let mut found = Vec::with_capacity(k);

        if k > 0 {
            if let Some(root_idx) = self.root {
                self.search_recursive(root_idx, query, k, &mut found);
            }
        }

        // Worst-first during the search; hand back ascending.
        found.sort_by(|a: &(usize, T), b| a.1.partial_cmp(&b.1).unwrap_or(Equal));

        Neighborhood {
            indices: found.iter().map(|f| f.0).collect(),
            distances: found.iter().map(|f| f.1).collect(),
        }
    }

    fn build_recursive(
        points: &[T],
        dims: usize,
        indices: &mut [usize],
        depth: usize,
        nodes: &mut Vec<TreeNode<T>>,
    ) -> Option<usize> {
        if indices.is_empty() {
            return None;
        }

        let axis = depth % dims;

        indices.sort_by(|&a, &b| {
            points[a * dims + axis]
                .partial_cmp(&points[b * dims + axis])
                .unwrap_or(Equal)
        });

        let median_idx = indices.len() / 2;
        let point_idx = indices[median_idx];

        let (left_indices, right_with_median) = indices.split_at_mut(median_idx);
        let right_indices = &mut right_with_median[1..];

        let current = nodes.len();
        nodes.push(TreeNode {
            index: point_idx,
            left: None,
            right: None,
            split_dim: axis,
            point: points[point_idx * dims..(point_idx + 1) * dims].to_vec(),
        });

        let left = Self::build_recursive(points, dims, left_indices, depth + 1, nodes);
        let right = Self::build_recursive(points, dims, right_indices, depth + 1, nodes);

        nodes[current].left = left;
        nodes[current].right = right;

        Some(current)
    }

    fn search_recursive(
        &self,
        node_idx: usize,
        query: &[T],
        k: usize,
        found: &mut Vec<(usize, T)>,
    ) {
        let node = &self.nodes[node_idx];

        let dist = T::sq_euclidean(&node.point, query);

        if found.len() < k {
            found.push((node.index, dist));
            found.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Equal));
        } else if dist < found[0].1 {
            found[0] = (node.index, dist);
            found.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Equal));
        }

        let axis = node.split_dim;
        let diff = query[axis] - node.point[axis];

        let (nearer, farther) = if diff <= T::zero() {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(next) = nearer {
            self.search_recursive(next, query, k, found);
        }

        if let Some(next) = farther {
            // The far side can only hold an improvement if the splitting
            // plane is closer than the current worst candidate.
            let plane_sq = diff * diff;
            if found.len() < k || plane_sq < found[0].1 {
                self.search_recursive(next, query, k, found);
            }
        }
    }
}
