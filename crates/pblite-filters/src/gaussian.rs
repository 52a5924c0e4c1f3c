use std::f32::consts::PI;

use pblite_kernel::{Kernel, MeshGrid};
use serde::{Deserialize, Serialize};

use crate::error::{check_sigma, FilterBankError};

/// Whether the Gaussian is stretched along y by the elongation ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elongation {
    /// `sigma_y = elongation * sigma_x`
    Elongated,
    /// `sigma_y = sigma_x`, the elongation ratio is ignored
    Isotropic,
}

/// The standard deviations along x and y of a 2D Gaussian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sigmas {
    pub x: f32,
    pub y: f32,
}

impl Sigmas {
    pub(crate) fn new(
        sigma: f32,
        elongation: f32,
        mode: Elongation,
    ) -> Result<Self, FilterBankError> {
        let x = check_sigma(sigma)?;
        let y = match mode {
            Elongation::Elongated => {
                if !(elongation.is_finite() && elongation > 0.0) {
                    return Err(FilterBankError::InvalidElongation(elongation));
                }
                elongation * x
            }
            Elongation::Isotropic => x,
        };
        Ok(Self { x, y })
    }
}

/// Evaluate the 2D Gaussian density at a single point.
#[inline]
pub(crate) fn gaussian_at(x: f32, y: f32, sigmas: Sigmas) -> f32 {
    let (sx, sy) = (sigmas.x, sigmas.y);
    let numerator = (-(x * x / (2.0 * sx * sx) + y * y / (2.0 * sy * sy))).exp();
    let denominator = 2.0 * PI * sx * sy;
    numerator / denominator
}

/// Evaluate a 2D Gaussian kernel on a centered grid.
///
/// `G(x, y) = exp(-(x^2 / (2 sx^2) + y^2 / (2 sy^2))) / (2 pi sx sy)`
/// with `sx = sigma` and `sy = elongation * sigma` for
/// [`Elongation::Elongated`], `sy = sx` otherwise.
///
/// The kernel is the sampled density, it is not renormalized to unit sum.
///
/// # Arguments
///
/// * `grid` - The centered coordinate grid.
/// * `sigma` - The standard deviation along x.
/// * `elongation` - The ratio `sigma_y / sigma_x`.
/// * `mode` - Whether the elongation ratio is applied.
///
/// # Errors
///
/// If `sigma` or (when elongated) `elongation` is not finite and positive.
///
/// # Example
///
/// ```
/// use pblite_filters::{gaussian_filter, Elongation};
/// use pblite_kernel::MeshGrid;
///
/// let grid = MeshGrid::centered(49).unwrap();
/// let g = gaussian_filter(&grid, 2.0, 1.0, Elongation::Isotropic).unwrap();
///
/// assert!((g.sum() - 1.0).abs() < 1e-2);
/// ```
pub fn gaussian_filter(
    grid: &MeshGrid,
    sigma: f32,
    elongation: f32,
    mode: Elongation,
) -> Result<Kernel, FilterBankError> {
    let sigmas = Sigmas::new(sigma, elongation, mode)?;
    Ok(grid.evaluate(|x, y| gaussian_at(x, y, sigmas)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pblite_kernel::MeshGrid;

    use super::{gaussian_filter, Elongation};
    use crate::FilterBankError;

    #[test]
    fn gaussian_sums_to_one() -> Result<(), FilterBankError> {
        let grid = MeshGrid::centered(49)?;
        for sigma in [1.0f32, std::f32::consts::SQRT_2, 2.0, 2.0 * std::f32::consts::SQRT_2, 4.0] {
            let g = gaussian_filter(&grid, sigma, 1.0, Elongation::Isotropic)?;
            assert_relative_eq!(g.sum(), 1.0, epsilon = 1e-2);
        }
        Ok(())
    }

    #[test]
    fn gaussian_is_point_symmetric() -> Result<(), FilterBankError> {
        let grid = MeshGrid::centered(15)?;
        let g = gaussian_filter(&grid, 1.5, 3.0, Elongation::Elongated)?;
        let n = grid.size();
        for r in 0..n {
            for c in 0..n {
                assert_eq!(g.get_unchecked(r, c), g.get_unchecked(n - 1 - r, n - 1 - c));
            }
        }
        Ok(())
    }

    #[test]
    fn gaussian_peak_value() -> Result<(), FilterBankError> {
        let grid = MeshGrid::centered(7)?;
        let g = gaussian_filter(&grid, 1.0, 1.0, Elongation::Isotropic)?;
        assert_relative_eq!(g.center(), 1.0 / (2.0 * std::f32::consts::PI));
        Ok(())
    }

    #[test]
    fn elongation_stretches_along_y() -> Result<(), FilterBankError> {
        let grid = MeshGrid::centered(21)?;
        let g = gaussian_filter(&grid, 2.0, 3.0, Elongation::Elongated)?;
        let c = grid.center_index();
        // same distance from the center, wider spread along y
        assert!(g.get_unchecked(c + 4, c) > g.get_unchecked(c, c + 4));

        let iso = gaussian_filter(&grid, 2.0, 3.0, Elongation::Isotropic)?;
        assert_eq!(iso.get_unchecked(c + 4, c), iso.get_unchecked(c, c + 4));
        Ok(())
    }

    #[test]
    fn gaussian_rejects_bad_parameters() -> Result<(), FilterBankError> {
        let grid = MeshGrid::centered(7)?;
        assert_eq!(
            gaussian_filter(&grid, 0.0, 1.0, Elongation::Isotropic),
            Err(FilterBankError::InvalidSigma(0.0))
        );
        assert_eq!(
            gaussian_filter(&grid, 1.0, -1.0, Elongation::Elongated),
            Err(FilterBankError::InvalidElongation(-1.0))
        );
        // the ratio is not used by the isotropic Gaussian
        assert!(gaussian_filter(&grid, 1.0, -1.0, Elongation::Isotropic).is_ok());
        Ok(())
    }
}
