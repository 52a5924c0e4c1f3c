//! Filter operations
//!
//! This module provides 2D correlation of kernels with fixed operators.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod convolution;
pub use convolution::*;
