use pblite_kernel::Kernel;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `src` - The input array.
/// * `u` - The x coordinate of the position to interpolate.
/// * `v` - The y coordinate of the position to interpolate.
///
/// # Returns
///
/// The value of the nearest sample, or zero when it falls outside of `src`.
pub(crate) fn nearest_neighbor_interpolation(src: &Kernel, u: f32, v: f32) -> f32 {
    let iu = u.round();
    let iv = v.round();

    if iu < 0.0 || iv < 0.0 {
        return 0.0;
    }

    src.get(iv as usize, iu as usize).unwrap_or(0.0)
}
