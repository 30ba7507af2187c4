//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module provides the precondition checks every public entry point
//! runs before any tree work begins: input shape, coordinate finiteness,
//! and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first violation.
//! * **Efficiency**: checks are ordered from cheap to expensive; the
//!   finiteness scan over the whole slab comes last.
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Once validation passes, the sampling run cannot fail.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or copy input data.
//! * This module does not perform the sampling itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::sampler::MAX_DIMENSIONS;
use crate::primitives::errors::FpsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sampling configuration and input data.
///
/// All methods fail fast with the first violation found.
pub struct Validator;

impl Validator {
    /// Validate the flattened input cloud and return its point count.
    pub fn validate_cloud<T: Float>(data: &[T], dimensions: usize) -> Result<usize, FpsError> {
        // Check 1: non-empty input
        if data.is_empty() {
            return Err(FpsError::EmptyInput);
        }

        // Check 2: row-major shape
        if dimensions == 0 || data.len() % dimensions != 0 {
            return Err(FpsError::ShapeMismatch {
                len: data.len(),
                dimensions,
            });
        }

        // Check 3: all coordinates finite
        for (i, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(FpsError::NonFiniteValue(format!(
                    "data[{}]={}",
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(data.len() / dimensions)
    }

    /// Validate the dimension ceiling of the bucket-accelerated variants.
    pub fn validate_dimensions(dimensions: usize) -> Result<(), FpsError> {
        if dimensions == 0 || dimensions > MAX_DIMENSIONS {
            return Err(FpsError::DimensionOutOfRange {
                got: dimensions,
                max: MAX_DIMENSIONS,
            });
        }
        Ok(())
    }

    /// Validate the sample count and start index against the cloud size.
    pub fn validate_selection(
        n_points: usize,
        n_samples: usize,
        start_index: usize,
    ) -> Result<(), FpsError> {
        if n_samples == 0 {
            return Err(FpsError::InvalidSampleCount(n_samples));
        }
        if n_samples > n_points {
            return Err(FpsError::TooManySamples {
                requested: n_samples,
                available: n_points,
            });
        }
        if start_index >= n_points {
            return Err(FpsError::StartIndexOutOfRange {
                start: start_index,
                n_points,
            });
        }
        Ok(())
    }

    /// Validate the KD-line tree height.
    pub fn validate_height(height: usize) -> Result<(), FpsError> {
        if height == 0 {
            return Err(FpsError::InvalidHeight(height));
        }
        Ok(())
    }

    /// Validate the local-window width.
    pub fn validate_window(window: usize) -> Result<(), FpsError> {
        if window == 0 {
            return Err(FpsError::InvalidWindowSize(window));
        }
        Ok(())
    }

    /// Validate the nearest-neighbor count.
    pub fn validate_neighbors(neighbors: usize) -> Result<(), FpsError> {
        if neighbors == 0 {
            return Err(FpsError::InvalidNeighborCount(neighbors));
        }
        Ok(())
    }
}
