#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// kernel filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// border handling module.
pub mod padding;

/// kernel geometric transformations module.
pub mod warp;
