//! Layer 1: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks:
//! - Squared-distance kernels (SIMD-accelerated for f32/f64)
//! - A static KD-tree for k-nearest-neighbor queries
//!
//! Nothing here knows about sampling; these are reusable pieces with no
//! algorithm-specific state.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Baselines
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Tree
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Math ← You are here
//! ```

/// Squared Euclidean distance kernels.
pub mod distance;

/// Static KD-tree for k-nearest-neighbor search.
pub mod neighborhood;
