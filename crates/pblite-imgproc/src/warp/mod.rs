//! Geometric transformations of kernels using affine warps.
//!
//! - Rotation matrix generation
//! - Affine transform inversion
//! - Affine warps with same-size output
//!
//! # Examples
//!
//! Rotating a kernel by 45 degrees about its center pixel:
//!
//! ```
//! use pblite_kernel::{Kernel, KernelSize};
//! use pblite_imgproc::interpolation::InterpolationMode;
//! use pblite_imgproc::warp::rotate_about_center;
//!
//! let kernel = Kernel::from_size_val(KernelSize::square(7), 1.0);
//! let rotated = rotate_about_center(&kernel, 45.0, InterpolationMode::Bilinear);
//!
//! assert_eq!(rotated.size(), kernel.size());
//! assert!((rotated.center() - 1.0).abs() < 1e-5);
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, invert_affine_transform, rotate_about_center, warp_affine,
};
