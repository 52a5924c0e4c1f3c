use pblite_kernel::Kernel;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `src` - The input array.
/// * `u` - The x coordinate of the position to interpolate.
/// * `v` - The y coordinate of the position to interpolate.
///
/// # Returns
///
/// The interpolated value. Samples of the 2x2 neighbourhood that fall
/// outside of `src` contribute zero.
pub(crate) fn bilinear_interpolation(src: &Kernel, u: f32, v: f32) -> f32 {
    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu0 = u0 as isize;
    let iv0 = v0 as isize;

    let sample = |row: isize, col: isize| -> f32 {
        if row < 0 || col < 0 {
            return 0.0;
        }
        src.get(row as usize, col as usize).unwrap_or(0.0)
    };

    let p00 = sample(iv0, iu0);
    let p01 = sample(iv0, iu0 + 1);
    let p10 = sample(iv0 + 1, iu0);
    let p11 = sample(iv0 + 1, iu0 + 1);

    p00 * w00 + p01 * w01 + p10 * w10 + p11 * w11
}

#[cfg(test)]
mod tests {
    use super::bilinear_interpolation;
    use approx::assert_relative_eq;
    use pblite_kernel::{Kernel, KernelSize};

    #[test]
    fn bilinear_on_grid_points_is_exact() {
        let src = Kernel::from_fn(KernelSize::square(3), |r, c| (r * 3 + c) as f32);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(
                    bilinear_interpolation(&src, c as f32, r as f32),
                    src.get_unchecked(r, c)
                );
            }
        }
    }

    #[test]
    fn bilinear_midpoint() {
        let src = Kernel::from_fn(KernelSize::square(2), |r, c| (r * 2 + c) as f32);
        assert_relative_eq!(bilinear_interpolation(&src, 0.5, 0.5), 1.5);
    }

    #[test]
    fn bilinear_fades_to_zero_outside() {
        let src = Kernel::from_size_val(KernelSize::square(2), 1.0);
        assert_relative_eq!(bilinear_interpolation(&src, -0.5, 0.0), 0.5);
        assert_relative_eq!(bilinear_interpolation(&src, 1.25, 0.0), 0.75);
        assert_eq!(bilinear_interpolation(&src, -3.0, -3.0), 0.0);
    }
}
