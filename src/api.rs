//! High-level API for farthest point sampling.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a sampling run, the configured sampler it
//! produces, and direct convenience functions for one-off calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with defaults for everything except the
//!   sample count.
//! * **Validated**: parameter-only checks run at `build()`; checks that
//!   need the cloud (shape, finiteness, ranges) run at `sample()`. Either
//!   way, every check precedes any tree work.
//! * **Type-Safe**: generic over `f32` and `f64` through `DistanceLinalg`.
//!
//! ### Configuration flow
//!
//! 1. Create a builder via [`FpsBuilder::new`] (aliased `Fps` in the
//!    prelude).
//! 2. Chain configuration methods (`.samples()`, `.start_index()`,
//!    `.variant()`).
//! 3. Call `.build()` for a [`FarthestPointSampler`], then `.sample()` it
//!    over a row-major cloud.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::marker::PhantomData;

// Internal dependencies
use crate::baselines::{exhaustive, knn, window};
use crate::engine::sampler::{sample_bucket, TreeShape};
use crate::engine::validator::Validator;
use crate::math::distance::DistanceLinalg;

// Publicly re-exported types
pub use crate::engine::sampler::MAX_DIMENSIONS;
pub use crate::primitives::errors::FpsError;

// ============================================================================
// Variant Selection
// ============================================================================

/// Selection strategy for a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingVariant {
    /// Bucket KD-tree subdivided to single-point leaves. The default; best
    /// pruning depth, exact greedy selection.
    #[default]
    KdTree,

    /// Bucket tree cut off at a fixed height and scanned as a flat leaf
    /// list. Exact greedy selection; trades pruning depth for
    /// cache-friendly linear scans.
    KdLine {
        /// Height at which subdivision stops (≥ 1).
        height: usize,
    },

    /// Full distance refresh after every pick. Exact and simple, O(N·M).
    Exhaustive,

    /// Refresh only a window of rows around the previous pick. Approximate;
    /// meant for clouds whose row order tracks spatial locality.
    LocalWindow {
        /// Window width in rows (≥ 1).
        window: usize,
    },

    /// Refresh only the k nearest neighbors of the previous pick, found
    /// through a static KD-tree. Approximate.
    NearestNeighbors {
        /// Neighborhood size (≥ 1); capped at the cloud size.
        neighbors: usize,
    },
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring farthest point sampling.
///
/// ```
/// use fps_rs::prelude::*;
///
/// let data = vec![0.0_f64, 0.0, 10.0, 0.0, 5.0, 5.0];
/// let picks = Fps::new()
///     .samples(3)
///     .start_index(0)
///     .variant(SamplingVariant::KdTree)
///     .build()?
///     .sample(&data, 2)?;
/// assert_eq!(picks, vec![0, 1, 2]);
/// # Result::<(), FpsError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct FpsBuilder<T: DistanceLinalg> {
    /// Number of indices to emit.
    pub n_samples: Option<usize>,

    /// Index of the first sample (default 0).
    pub start_index: Option<usize>,

    /// Selection strategy (default [`SamplingVariant::KdTree`]).
    pub variant: Option<SamplingVariant>,

    _scalar: PhantomData<T>,
}

impl<T: DistanceLinalg> Default for FpsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DistanceLinalg> FpsBuilder<T> {
    /// Create a builder with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_samples: None,
            start_index: None,
            variant: None,
            _scalar: PhantomData,
        }
    }

    /// Set the number of samples to select. Required.
    #[must_use]
    pub fn samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Set the index of the first sample.
    #[must_use]
    pub fn start_index(mut self, start_index: usize) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Set the selection strategy.
    #[must_use]
    pub fn variant(mut self, variant: SamplingVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Validate the parameter-only configuration and produce a sampler.
    pub fn build(self) -> Result<FarthestPointSampler<T>, FpsError> {
        let n_samples = self.n_samples.unwrap_or(0);
        if n_samples == 0 {
            return Err(FpsError::InvalidSampleCount(n_samples));
        }

        let variant = self.variant.unwrap_or_default();
        match variant {
            SamplingVariant::KdLine { height } => Validator::validate_height(height)?,
            SamplingVariant::LocalWindow { window } => Validator::validate_window(window)?,
            SamplingVariant::NearestNeighbors { neighbors } => {
                Validator::validate_neighbors(neighbors)?
            }
            SamplingVariant::KdTree | SamplingVariant::Exhaustive => {}
        }

        Ok(FarthestPointSampler {
            n_samples,
            start_index: self.start_index.unwrap_or(0),
            variant,
            _scalar: PhantomData,
        })
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// A validated sampling configuration, ready to run over point clouds.
#[derive(Debug, Clone)]
pub struct FarthestPointSampler<T: DistanceLinalg> {
    n_samples: usize,
    start_index: usize,
    variant: SamplingVariant,
    _scalar: PhantomData<T>,
}

impl<T: DistanceLinalg> FarthestPointSampler<T> {
    /// Select sample indices from a row-major cloud of
    /// `data.len() / dimensions` points.
    ///
    /// `data` is not modified; the bucket variants copy it into a working
    /// slab. On error the input is untouched and nothing is emitted.
    pub fn sample(&self, data: &[T], dimensions: usize) -> Result<Vec<usize>, FpsError> {
        let n_points = Validator::validate_cloud(data, dimensions)?;
        Validator::validate_selection(n_points, self.n_samples, self.start_index)?;

        match self.variant {
            SamplingVariant::KdTree => {
                Validator::validate_dimensions(dimensions)?;
                Ok(sample_bucket(
                    data,
                    dimensions,
                    self.n_samples,
                    self.start_index,
                    TreeShape::Recursive,
                ))
            }
            SamplingVariant::KdLine { height } => {
                Validator::validate_dimensions(dimensions)?;
                Ok(sample_bucket(
                    data,
                    dimensions,
                    self.n_samples,
                    self.start_index,
                    TreeShape::Leveled(height),
                ))
            }
            SamplingVariant::Exhaustive => Ok(exhaustive::sample(
                data,
                dimensions,
                self.n_samples,
                self.start_index,
            )),
            SamplingVariant::LocalWindow { window } => Ok(window::sample(
                data,
                dimensions,
                self.n_samples,
                window,
                self.start_index,
            )),
            SamplingVariant::NearestNeighbors { neighbors } => Ok(knn::sample(
                data,
                dimensions,
                self.n_samples,
                neighbors,
                self.start_index,
            )),
        }
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Bucket KD-tree sampling in one call.
pub fn sample_kdtree<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
) -> Result<Vec<usize>, FpsError> {
    FpsBuilder::new()
        .samples(n_samples)
        .start_index(start_index)
        .variant(SamplingVariant::KdTree)
        .build()?
        .sample(data, dimensions)
}

/// KD-line sampling in one call.
pub fn sample_kdline<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
    height: usize,
) -> Result<Vec<usize>, FpsError> {
    FpsBuilder::new()
        .samples(n_samples)
        .start_index(start_index)
        .variant(SamplingVariant::KdLine { height })
        .build()?
        .sample(data, dimensions)
}

/// Exhaustive sampling in one call.
pub fn sample_exhaustive<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
) -> Result<Vec<usize>, FpsError> {
    FpsBuilder::new()
        .samples(n_samples)
        .start_index(start_index)
        .variant(SamplingVariant::Exhaustive)
        .build()?
        .sample(data, dimensions)
}

/// Local-window sampling in one call.
pub fn sample_local_window<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
    window: usize,
) -> Result<Vec<usize>, FpsError> {
    FpsBuilder::new()
        .samples(n_samples)
        .start_index(start_index)
        .variant(SamplingVariant::LocalWindow { window })
        .build()?
        .sample(data, dimensions)
}

/// Nearest-neighbor sampling in one call.
pub fn sample_nearest_neighbors<T: DistanceLinalg>(
    data: &[T],
    dimensions: usize,
    n_samples: usize,
    start_index: usize,
    neighbors: usize,
) -> Result<Vec<usize>, FpsError> {
    FpsBuilder::new()
        .samples(n_samples)
        .start_index(start_index)
        .variant(SamplingVariant::NearestNeighbors { neighbors })
        .build()?
        .sample(data, dimensions)
}
