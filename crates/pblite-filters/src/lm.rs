//! Leung-Malik filter bank.
//!
//! 48 kernels: oriented first and second x-derivatives of an elongated
//! Gaussian at three scales, followed by Laplacians of Gaussian and plain
//! Gaussians at every scale of the selected set.

use std::f32::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use pblite_kernel::MeshGrid;
use serde::{Deserialize, Serialize};

use crate::bank::{rotations, BankLayout, FilterBank};
use crate::derivative::{derivative_gaussian_filter, DerivativeOrder};
use crate::error::FilterBankError;
use crate::gaussian::{gaussian_filter, Elongation};

/// Number of oriented scales, taken from the front of the scale set.
const ORIENTED_SCALES: usize = 3;

/// Factor applied to the scales of the second group of Laplacians.
const LOG_SCALE_FACTOR: f32 = 3.0;

/// The two scale sets of the Leung-Malik bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LmVariant {
    /// scales {1, sqrt(2), 2, 2 sqrt(2)}
    Small,
    /// scales {sqrt(2), 2, 2 sqrt(2), 4}
    Large,
}

impl LmVariant {
    /// The four standard deviations of the variant.
    pub fn scales(&self) -> [f32; 4] {
        match self {
            LmVariant::Small => [1.0, SQRT_2, 2.0, 2.0 * SQRT_2],
            LmVariant::Large => [SQRT_2, 2.0, 2.0 * SQRT_2, 4.0],
        }
    }

    /// The name of the bank built for this variant.
    pub fn bank_name(&self) -> &'static str {
        match self {
            LmVariant::Small => "LMs",
            LmVariant::Large => "LMl",
        }
    }

    /// Select a variant by name, falling back to [`LmVariant::Large`].
    ///
    /// `"small"` (any case) selects [`LmVariant::Small`]; every other name
    /// selects [`LmVariant::Large`]. A name that is not `"large"` either is
    /// logged as a warning. Use [`str::parse`] to reject unknown names instead.
    ///
    /// # Example
    ///
    /// ```
    /// use pblite_filters::LmVariant;
    ///
    /// assert_eq!(LmVariant::from_name_lenient("small"), LmVariant::Small);
    /// assert_eq!(LmVariant::from_name_lenient("smal"), LmVariant::Large);
    /// ```
    pub fn from_name_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(variant) => variant,
            Err(_) => {
                log::warn!("unknown LM bank type {name:?}, using the large scale set");
                LmVariant::Large
            }
        }
    }
}

impl FromStr for LmVariant {
    type Err = FilterBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("small") {
            Ok(LmVariant::Small)
        } else if s.eq_ignore_ascii_case("large") {
            Ok(LmVariant::Large)
        } else {
            Err(FilterBankError::UnknownBankType(s.to_string()))
        }
    }
}

impl fmt::Display for LmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LmVariant::Small => write!(f, "small"),
            LmVariant::Large => write!(f, "large"),
        }
    }
}

/// Parameters of the Leung-Malik bank shared by both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LmParams {
    /// Window size of each kernel, must be odd.
    pub size: usize,
    /// Ratio `sigma_y / sigma_x` of the oriented derivative kernels.
    pub elongation: f32,
    /// Number of orientations evenly spaced over 360 degrees.
    pub orientations: usize,
}

impl Default for LmParams {
    fn default() -> Self {
        Self {
            size: 49,
            elongation: 3.0,
            orientations: 6,
        }
    }
}

/// Build the Leung-Malik bank for a variant with the default parameters.
///
/// 49x49 kernels, elongation 3, 6 orientations. The 48 kernels are, in order:
///
/// 1. 18 first x-derivatives: 3 scales x 6 orientations
/// 2. 18 second x-derivatives: 3 scales x 6 orientations
/// 3. 4 Laplacians of Gaussian, one per scale
/// 4. 4 Laplacians of Gaussian at 3 times each scale
/// 5. 4 Gaussians, one per scale
///
/// # Example
///
/// ```
/// use pblite_filters::{lm_filter_bank, LmVariant};
///
/// let bank = lm_filter_bank(LmVariant::Small).unwrap();
///
/// assert_eq!(bank.len(), 48);
/// assert_eq!(bank.name(), "LMs");
/// ```
pub fn lm_filter_bank(variant: LmVariant) -> Result<FilterBank, FilterBankError> {
    lm_filter_bank_with(variant, &LmParams::default())
}

/// Build a Leung-Malik bank.
///
/// # Errors
///
/// If the window size is even or zero, the elongation is not positive, or
/// there is no orientation.
pub fn lm_filter_bank_with(
    variant: LmVariant,
    params: &LmParams,
) -> Result<FilterBank, FilterBankError> {
    if params.orientations == 0 {
        return Err(FilterBankError::InvalidOrientationCount(0));
    }

    let grid = MeshGrid::centered(params.size)?;
    let scales = variant.scales();
    let oriented = &scales[..ORIENTED_SCALES];

    let mut first_derivatives = Vec::with_capacity(ORIENTED_SCALES * params.orientations);
    let mut second_derivatives = Vec::with_capacity(ORIENTED_SCALES * params.orientations);
    for &sigma in oriented {
        let first = derivative_gaussian_filter(
            &grid,
            sigma,
            params.elongation,
            DerivativeOrder::FirstX,
            Elongation::Elongated,
        )?;
        let second = derivative_gaussian_filter(
            &grid,
            sigma,
            params.elongation,
            DerivativeOrder::SecondX,
            Elongation::Elongated,
        )?;

        first_derivatives.extend(rotations(&first, params.orientations));
        second_derivatives.extend(rotations(&second, params.orientations));
    }

    let mut filters = first_derivatives;
    filters.append(&mut second_derivatives);

    for &sigma in &scales {
        filters.push(derivative_gaussian_filter(
            &grid,
            sigma,
            params.elongation,
            DerivativeOrder::Laplacian,
            Elongation::Isotropic,
        )?);
    }

    for &sigma in &scales {
        filters.push(derivative_gaussian_filter(
            &grid,
            LOG_SCALE_FACTOR * sigma,
            params.elongation,
            DerivativeOrder::Laplacian,
            Elongation::Isotropic,
        )?);
    }

    for &sigma in &scales {
        filters.push(gaussian_filter(
            &grid,
            sigma,
            params.elongation,
            Elongation::Isotropic,
        )?);
    }

    log::debug!(
        "built {} bank ({variant} scales {:?}): {} kernels of {}x{}",
        variant.bank_name(),
        scales,
        filters.len(),
        params.size,
        params.size
    );

    // oriented kernels fill whole rows, the 12 isotropic ones share the last row
    let cols = 2 * params.orientations;
    let rows = filters.len().div_ceil(cols);
    Ok(FilterBank::new(
        variant.bank_name(),
        BankLayout { rows, cols },
        filters,
    ))
}
