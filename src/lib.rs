//! # fps_rs — Farthest Point Sampling for Rust
//!
//! An efficient farthest point sampling (FPS) implementation for
//! low-dimensional point clouds, built around a bucket-based KD-tree with
//! champion caching and deferred reference delivery.
//!
//! ## What is FPS?
//!
//! Farthest point sampling greedily selects M of N points so that each new
//! pick maximizes its minimum distance to everything picked before it. The
//! result spreads evenly over the cloud, which makes FPS the standard
//! down-sampling step in point-cloud learning pipelines and geometry
//! processing.
//!
//! The catch is cost: the naive loop refreshes every point's distance after
//! every pick, O(N·M·D) in total, and becomes the bottleneck long before
//! the model it feeds does. The bucket KD-tree variants here cut that down
//! by caching, per subtree, the point that currently sits farthest from the
//! selected set, and by proving — through bounding-box lower bounds — that
//! most subtrees cannot be affected by a new pick at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use fps_rs::prelude::*;
//!
//! // Row-major N x D cloud: three 2D points.
//! let data = vec![0.0_f64, 0.0, 10.0, 0.0, 5.0, 5.0];
//!
//! let picks = Fps::new()
//!     .samples(3)         // How many indices to select
//!     .start_index(0)     // First pick (defaults to 0)
//!     .build()?
//!     .sample(&data, 2)?; // 2 coordinates per point
//!
//! assert_eq!(picks, vec![0, 1, 2]);
//! # Result::<(), FpsError>::Ok(())
//! ```
//!
//! ### Choosing a variant
//!
//! ```rust
//! use fps_rs::prelude::*;
//! # let data = vec![0.0_f32, 0.0, 10.0, 0.0, 5.0, 5.0, 1.0, 1.0];
//!
//! let picks = Fps::new()
//!     .samples(4)
//!     .variant(SamplingVariant::KdLine { height: 2 })
//!     .build()?
//!     .sample(&data, 2)?;
//! # Result::<(), FpsError>::Ok(())
//! ```
//!
//! | Variant | Selection | Cost profile | Use when |
//! |---------|-----------|--------------|----------|
//! | `KdTree` | exact | best pruning depth | default choice |
//! | `KdLine { height }` | exact | flat bucket scans, cache friendly | large M, moderate N |
//! | `Exhaustive` | exact | O(N·M), no setup | tiny inputs, ground truth |
//! | `LocalWindow { window }` | approximate | O(window·M) | row order tracks locality |
//! | `NearestNeighbors { neighbors }` | approximate | O(k·log N·M) | quality/speed trade-off |
//!
//! The two bucket variants accept 1 to 8 dimensions (the code is
//! monomorphized per dimension); the three baselines accept any dimension
//! count.
//!
//! ### One-off calls
//!
//! Each variant also has a direct function when builder ceremony is not
//! worth it:
//!
//! ```rust
//! use fps_rs::prelude::*;
//! # let data = vec![0.0_f64, 1.0, 2.0, 3.0];
//!
//! let picks = sample_kdtree(&data, 1, 2, 0)?;
//! assert_eq!(picks, vec![0, 3]);
//! # Result::<(), FpsError>::Ok(())
//! ```
//!
//! ## Determinism
//!
//! Given the same input, every variant produces the same output on every
//! run: comparisons are strict, candidate scans keep the earliest winner on
//! ties, and the left subtree keeps the champion slot when both halves tie.
//! Duplicate points are allowed; a duplicate of an earlier pick simply sits
//! at distance zero and is only selected once nothing farther remains.
//!
//! ## Error Handling
//!
//! All preconditions are checked before any tree is built; a failing call
//! returns an [`FpsError`](prelude::FpsError) and leaves nothing behind.
//!
//! ```rust
//! use fps_rs::prelude::*;
//!
//! let data = vec![0.0_f64, 1.0, 2.0];
//! let result = Fps::new().samples(5).build()?.sample(&data, 1);
//! assert!(matches!(result, Err(FpsError::TooManySamples { .. })));
//! # Result::<(), FpsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard library (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! fps_rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Eldar, Y. et al. (1997). "The Farthest Point Strategy for Progressive
//!   Image Sampling"
//! - Han, M. et al. (2023). "QuickFPS: Architecture and Algorithm Co-Design
//!   for Farthest Point Sampling in Point Cloud Deep Learning"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Math - pure numeric functions.
//
// Contains the SIMD squared-distance kernels and the static
// nearest-neighbor KD-tree.
mod math;

// Layer 2: Primitives - data structures and basic utilities.
//
// Contains the point record, axis-aligned intervals/boxes, and the crate
// error type.
mod primitives;

// Layer 3: Tree - the bucket KD-tree core.
//
// Contains in-place construction, the per-node champion/deferral state,
// and the two tree shapes (recursive and fixed-height).
mod tree;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the greedy selection loop, and runtime
// dimension dispatch.
mod engine;

// Layer 5: Baselines - the simpler sampling strategies.
//
// Contains the exhaustive, local-window, and nearest-neighbor samplers.
mod baselines;

// High-level fluent API for farthest point sampling.
//
// Provides the `FpsBuilder` for configuring and running a selection.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the commonly used types:
///
/// ```
/// use fps_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        sample_exhaustive, sample_kdline, sample_kdtree, sample_local_window,
        sample_nearest_neighbors, FarthestPointSampler, FpsBuilder as Fps, FpsError,
        SamplingVariant, MAX_DIMENSIONS,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal bucket-tree core.
    pub mod tree {
        pub use crate::tree::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal baseline samplers.
    pub mod baselines {
        pub use crate::baselines::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
