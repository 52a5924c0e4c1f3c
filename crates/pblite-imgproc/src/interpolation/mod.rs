//! Sampling of kernels at fractional positions.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest sample (no interpolation)
//! - **Bilinear**: linear interpolation between the four surrounding samples
//!
//! Positions outside of the source contribute zero, so a warp fades out
//! smoothly at the kernel border instead of dropping whole pixels.

mod bilinear;
mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
