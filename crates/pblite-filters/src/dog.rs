//! Oriented derivative-of-Gaussian bank.
//!
//! Each scale contributes an isotropic Gaussian correlated with the 3x3
//! Sobel-x operator, rotated through evenly spaced orientations.

use std::f32::consts::SQRT_2;

use pblite_imgproc::{
    filter::{filter2d, kernels},
    padding::PaddingMode,
};
use pblite_kernel::{Kernel, MeshGrid};
use serde::{Deserialize, Serialize};

use crate::bank::{rotations, BankLayout, FilterBank};
use crate::error::FilterBankError;
use crate::gaussian::{gaussian_filter, Elongation};

/// Name of the bank built by [`dog_filter_bank`].
pub const DOG_BANK_NAME: &str = "DoG1";

/// Parameters of the derivative-of-Gaussian bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DogParams {
    /// Window size of each kernel, must be odd.
    pub size: usize,
    /// Standard deviations, one bank row each.
    pub scales: Vec<f32>,
    /// Number of orientations evenly spaced over 360 degrees.
    pub orientations: usize,
}

impl Default for DogParams {
    fn default() -> Self {
        Self {
            size: 7,
            scales: vec![1.0, SQRT_2],
            orientations: 16,
        }
    }
}

/// Build the derivative-of-Gaussian bank with the default parameters.
///
/// Two scales (1 and sqrt(2)), 16 orientations, 7x7 kernels: 32 kernels
/// grouped by scale then orientation.
///
/// # Example
///
/// ```
/// use pblite_filters::dog_filter_bank;
///
/// let bank = dog_filter_bank().unwrap();
///
/// assert_eq!(bank.len(), 32);
/// assert_eq!(bank[0].rows(), 7);
/// ```
pub fn dog_filter_bank() -> Result<FilterBank, FilterBankError> {
    dog_filter_bank_with(&DogParams::default())
}

/// Build a derivative-of-Gaussian bank.
///
/// For every scale the isotropic Gaussian is correlated with the Sobel-x
/// operator (same-size output, [`PaddingMode::Reflect101`] border), then
/// rotated about its center pixel through `orientations` angles
/// `i * 360 / orientations` with bilinear sampling.
///
/// # Errors
///
/// If the window size is even or zero, a scale is not positive, or there is
/// no orientation.
pub fn dog_filter_bank_with(params: &DogParams) -> Result<FilterBank, FilterBankError> {
    if params.orientations == 0 {
        return Err(FilterBankError::InvalidOrientationCount(0));
    }

    let grid = MeshGrid::centered(params.size)?;
    let sobel_x = kernels::sobel_x_kernel_3x3();

    let mut filters = Vec::with_capacity(params.scales.len() * params.orientations);
    for &sigma in &params.scales {
        let gaussian = gaussian_filter(&grid, sigma, 1.0, Elongation::Isotropic)?;

        let mut dog = Kernel::from_size_val(gaussian.size(), 0.0);
        filter2d(&gaussian, &mut dog, &sobel_x, PaddingMode::Reflect101)?;

        filters.extend(rotations(&dog, params.orientations));
    }

    log::debug!(
        "built {} bank: {} scales x {} orientations, {}x{} kernels",
        DOG_BANK_NAME,
        params.scales.len(),
        params.orientations,
        params.size,
        params.size
    );

    let layout = BankLayout {
        rows: params.scales.len(),
        cols: params.orientations,
    };
    Ok(FilterBank::new(DOG_BANK_NAME, layout, filters))
}
