use std::f32::consts::PI;

use pblite_kernel::Kernel;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix. A singular matrix maps every point to the origin.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// Positive angles rotate counter-clockwise as seen on screen (y pointing down).
///
/// # Arguments
///
/// * `center` - The center point of the rotation, as (x, y).
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use pblite_imgproc::warp::get_rotation_matrix2d;
///
/// let m = get_rotation_matrix2d((3.0, 3.0), 0.0, 1.0);
///
/// assert_eq!(m, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to a 2D array.
///
/// Every destination pixel is mapped back through the inverse of `m` and
/// sampled from `src`; positions outside of `src` read as zero.
///
/// # Arguments
///
/// * `src` - The input array with shape (height, width).
/// * `dst` - The output array; its shape sets the output size.
/// * `m` - The 2x3 affine transformation matrix mapping `src` to `dst`.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use pblite_kernel::{Kernel, KernelSize};
/// use pblite_imgproc::interpolation::InterpolationMode;
/// use pblite_imgproc::warp::warp_affine;
///
/// let src = Kernel::from_fn(KernelSize::square(3), |r, c| (r * 3 + c) as f32);
/// let mut dst = Kernel::from_size_val(src.size(), 0.0);
///
/// warp_affine(&src, &mut dst, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0], InterpolationMode::Nearest);
///
/// assert_eq!(dst, src);
/// ```
pub fn warp_affine(
    src: &Kernel,
    dst: &mut Kernel,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    let dst_cols = dst.cols();
    if dst_cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row.iter_mut().enumerate().for_each(|(c, dst_pixel)| {
                let (u, v) = transform_point(c as f32, r as f32, &m_inv);
                *dst_pixel = interpolate_pixel(src, u, v, interpolation);
            });
        });
}

/// Rotates a kernel about its center pixel, keeping its size.
///
/// The center is `(cols / 2, rows / 2)`, which is the origin of a centered
/// odd-sized grid. The scale factor is one.
///
/// # Arguments
///
/// * `src` - The kernel to rotate.
/// * `angle` - The angle of rotation in degrees, counter-clockwise.
/// * `interpolation` - The interpolation mode to use.
pub fn rotate_about_center(src: &Kernel, angle: f32, interpolation: InterpolationMode) -> Kernel {
    let center = ((src.cols() / 2) as f32, (src.rows() / 2) as f32);
    let m = get_rotation_matrix2d(center, angle, 1.0);
    let mut dst = Kernel::from_size_val(src.size(), 0.0);
    warp_affine(src, &mut dst, &m, interpolation);
    dst
}
