use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use pblite_kernel::Kernel;

/// Interpolation mode for the warp operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a value
///
/// # Arguments
///
/// * `src` - The input array with shape (height, width).
/// * `u` - The x coordinate (column) of the position to interpolate.
/// * `v` - The y coordinate (row) of the position to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated value, treating everything outside of `src` as zero.
pub fn interpolate_pixel(src: &Kernel, u: f32, v: f32, interpolation: InterpolationMode) -> f32 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(src, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(src, u, v),
    }
}
