//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sampling run:
//! - Fail-fast validation of the input cloud and configuration
//! - The greedy selection loop over any spatial index
//! - Dispatch from the runtime dimension count onto the monomorphized
//!   per-dimension code paths
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Baselines
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Tree
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Math
//! ```

/// Greedy selection loop and dimension dispatch.
pub mod sampler;

/// Input and configuration validation.
pub mod validator;
