use pblite_kernel::{Kernel, KernelError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::padding::PaddingMode;

/// Correlate a 2D array with a kernel, keeping the size of the input.
///
/// The operator is not flipped and is anchored at its center pixel, so the
/// output at `(r, c)` is `sum_ij k(i, j) * src(r + i - kh / 2, c + j - kw / 2)`.
/// Reads outside of `src` follow the `padding` border policy.
///
/// # Arguments
///
/// * `src` - The source array with shape (H, W).
/// * `dst` - The destination array with shape (H, W).
/// * `kernel` - The operator to correlate with.
/// * `padding` - The border policy.
///
/// # Errors
///
/// If `src` and `dst` do not have the same shape, an error is returned.
///
/// # Example
///
/// ```
/// use pblite_kernel::{Kernel, KernelSize};
/// use pblite_imgproc::filter::{filter2d, kernels};
/// use pblite_imgproc::padding::PaddingMode;
///
/// let src = Kernel::from_fn(KernelSize::square(5), |_, c| c as f32);
/// let mut dst = Kernel::from_size_val(src.size(), 0.0);
///
/// filter2d(&src, &mut dst, &kernels::sobel_x_kernel_3x3(), PaddingMode::Reflect101).unwrap();
///
/// // a unit ramp along x gives -8 with the [1, 0, -1] sobel layout
/// assert_eq!(dst.center(), -8.0);
/// ```
pub fn filter2d(
    src: &Kernel,
    dst: &mut Kernel,
    kernel: &Kernel,
    padding: PaddingMode,
) -> Result<(), KernelError> {
    if src.size() != dst.size() {
        return Err(KernelError::ShapeMismatch(src.size(), dst.size()));
    }

    let cols = src.cols();
    if cols == 0 {
        return Ok(());
    }

    let anchor_r = (kernel.rows() / 2) as isize;
    let anchor_c = (kernel.cols() / 2) as isize;

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            dst_row.iter_mut().enumerate().for_each(|(c, dst_pixel)| {
                let mut sum = 0.0;
                for (i, kernel_row) in kernel.iter_rows().enumerate() {
                    let row = r as isize + i as isize - anchor_r;
                    for (j, &k) in kernel_row.iter().enumerate() {
                        let col = c as isize + j as isize - anchor_c;
                        sum += k * padding.sample(src, row, col);
                    }
                }
                *dst_pixel = sum;
            });
        });

    Ok(())
}
