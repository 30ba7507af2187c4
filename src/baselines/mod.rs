//! Layer 5: Baselines
//!
//! # Purpose
//!
//! This layer holds the simpler sampling strategies that sit beside the
//! bucket-tree core:
//! - An exhaustive reference sampler with full distance updates
//! - A local-window sampler that only refreshes indices near the last pick
//! - A nearest-neighbor sampler that refreshes the last pick's k-neighborhood
//!
//! They share nothing with the tree core beyond the distance kernels; each
//! works directly on the caller's flattened row-major slice and accepts any
//! dimension count.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Baselines ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Tree
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Math
//! ```

// External dependencies
use num_traits::Float;

/// Exhaustive reference sampler.
pub mod exhaustive;

/// Nearest-neighbor update sampler.
pub mod knn;

/// Local-window update sampler.
pub mod window;

/// Index of the largest value; the earliest keeps the slot on ties.
pub(crate) fn argmax<T: Float>(values: &[T]) -> usize {
    let mut best = 0;
    let mut best_value = T::neg_infinity();
    for (i, &value) in values.iter().enumerate() {
        if value > best_value {
            best_value = value;
            best = i;
        }
    }
    best
}
