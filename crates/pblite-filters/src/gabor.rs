use std::f32::consts::PI;

use pblite_kernel::{Kernel, MeshGrid};
use serde::{Deserialize, Serialize};

use crate::bank::{BankLayout, FilterBank};
use crate::error::{check_sigma, FilterBankError};

/// Name of the bank built by [`gabor_filter_bank`].
pub const GABOR_BANK_NAME: &str = "Gabor";

/// Parameters of the Gabor bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaborParams {
    /// Number of orientations evenly spaced over [0, pi).
    pub orientations: usize,
    /// Standard deviation of the Gaussian envelope.
    pub sigma: f32,
    /// Spatial aspect ratio of the envelope.
    pub gamma: f32,
    /// Phase offset of the sinusoid, in radians.
    pub psi: f32,
    /// Window size of each kernel, must be odd.
    pub size: usize,
    /// Wavelengths of the sinusoid, one bank row each.
    pub wavelengths: Vec<f32>,
}

impl Default for GaborParams {
    fn default() -> Self {
        Self {
            orientations: 8,
            sigma: 8.0,
            gamma: 0.65,
            psi: 0.0,
            size: 49,
            wavelengths: vec![2.0, 5.0, 10.0, 15.0, 20.0],
        }
    }
}

/// Evaluate a single Gabor kernel.
///
/// With `x' = x cos(theta) + y sin(theta)` and `y' = -x sin(theta) + y cos(theta)`:
///
/// `gb(x, y) = exp(-0.5 (x'^2 + gamma^2 y'^2) / sigma^2) cos(2 pi x' / lambda + psi)`
///
/// PRECONDITION: `sigma` and `lambda` are positive.
pub fn gabor_kernel(
    grid: &MeshGrid,
    sigma: f32,
    theta: f32,
    lambda: f32,
    gamma: f32,
    psi: f32,
) -> Kernel {
    let (sin_t, cos_t) = theta.sin_cos();
    let sigma2 = sigma * sigma;
    let gamma2 = gamma * gamma;

    grid.evaluate(|x, y| {
        let x_theta = x * cos_t + y * sin_t;
        let y_theta = -x * sin_t + y * cos_t;
        let envelope = (-0.5 * (x_theta * x_theta + gamma2 * y_theta * y_theta) / sigma2).exp();
        envelope * (2.0 * PI * x_theta / lambda + psi).cos()
    })
}

/// Build the Gabor bank on a 49x49 window with wavelengths {2, 5, 10, 15, 20}.
///
/// The kernels are grouped by wavelength, then by orientation
/// `theta_i = i * pi / orientations`.
///
/// # Arguments
///
/// * `orientations` - Number of orientations per wavelength.
/// * `sigma` - Standard deviation of the Gaussian envelope.
/// * `gamma` - Spatial aspect ratio.
/// * `psi` - Phase offset.
///
/// # Errors
///
/// If `orientations` is zero or `sigma` is not positive.
///
/// # Example
///
/// ```
/// use pblite_filters::gabor_filter_bank;
///
/// let bank = gabor_filter_bank(8, 8.0, 0.65, 0.0).unwrap();
///
/// assert_eq!(bank.len(), 40);
/// ```
pub fn gabor_filter_bank(
    orientations: usize,
    sigma: f32,
    gamma: f32,
    psi: f32,
) -> Result<FilterBank, FilterBankError> {
    gabor_filter_bank_with(&GaborParams {
        orientations,
        sigma,
        gamma,
        psi,
        ..Default::default()
    })
}

/// Build a Gabor bank.
///
/// # Errors
///
/// If the window size is even or zero, there is no orientation, `sigma` is
/// not positive, or a wavelength is not positive.
pub fn gabor_filter_bank_with(params: &GaborParams) -> Result<FilterBank, FilterBankError> {
    if params.orientations == 0 {
        return Err(FilterBankError::InvalidOrientationCount(0));
    }
    let sigma = check_sigma(params.sigma)?;
    if let Some(&lambda) = params
        .wavelengths
        .iter()
        .find(|&&l| !(l.is_finite() && l > 0.0))
    {
        return Err(FilterBankError::InvalidWavelength(lambda));
    }

    let grid = MeshGrid::centered(params.size)?;

    let mut filters = Vec::with_capacity(params.wavelengths.len() * params.orientations);
    for &lambda in &params.wavelengths {
        for i in 0..params.orientations {
            let theta = i as f32 * PI / params.orientations as f32;
            filters.push(gabor_kernel(
                &grid,
                sigma,
                theta,
                lambda,
                params.gamma,
                params.psi,
            ));
        }
    }

    log::debug!(
        "built {} bank: {} wavelengths x {} orientations, {}x{} kernels",
        GABOR_BANK_NAME,
        params.wavelengths.len(),
        params.orientations,
        params.size,
        params.size
    );

    let layout = BankLayout {
        rows: params.wavelengths.len(),
        cols: params.orientations,
    };
    Ok(FilterBank::new(GABOR_BANK_NAME, layout, filters))
}
