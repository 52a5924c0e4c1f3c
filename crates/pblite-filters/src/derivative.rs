use pblite_kernel::{Kernel, MeshGrid};
use serde::{Deserialize, Serialize};

use crate::error::FilterBankError;
use crate::gaussian::{gaussian_at, Elongation, Sigmas};

/// The partial derivative of the Gaussian to evaluate.
///
/// Only the five closed forms below exist; any other `(dx, dy)` pair is
/// rejected when converting into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivativeOrder {
    /// (1, 0): first derivative along x
    FirstX,
    /// (0, 1): first derivative along y
    FirstY,
    /// (2, 0): second derivative along x
    SecondX,
    /// (0, 2): second derivative along y
    SecondY,
    /// (2, 2): Laplacian of Gaussian
    Laplacian,
}

impl DerivativeOrder {
    /// Create an order from the derivative degrees along x and y.
    ///
    /// # Errors
    ///
    /// If the pair is not one of (1,0), (0,1), (2,0), (0,2) or (2,2).
    ///
    /// # Example
    ///
    /// ```
    /// use pblite_filters::{DerivativeOrder, FilterBankError};
    ///
    /// assert_eq!(DerivativeOrder::new(2, 2), Ok(DerivativeOrder::Laplacian));
    /// assert_eq!(
    ///     DerivativeOrder::new(1, 1),
    ///     Err(FilterBankError::UnsupportedDerivativeOrder(1, 1))
    /// );
    /// ```
    pub fn new(dx: u8, dy: u8) -> Result<Self, FilterBankError> {
        match (dx, dy) {
            (1, 0) => Ok(Self::FirstX),
            (0, 1) => Ok(Self::FirstY),
            (2, 0) => Ok(Self::SecondX),
            (0, 2) => Ok(Self::SecondY),
            (2, 2) => Ok(Self::Laplacian),
            _ => Err(FilterBankError::UnsupportedDerivativeOrder(dx, dy)),
        }
    }

    /// The derivative degrees along x and y.
    pub fn as_pair(&self) -> (u8, u8) {
        match self {
            Self::FirstX => (1, 0),
            Self::FirstY => (0, 1),
            Self::SecondX => (2, 0),
            Self::SecondY => (0, 2),
            Self::Laplacian => (2, 2),
        }
    }
}

impl TryFrom<(u8, u8)> for DerivativeOrder {
    type Error = FilterBankError;

    fn try_from(order: (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(order.0, order.1)
    }
}

impl TryFrom<[u8; 2]> for DerivativeOrder {
    type Error = FilterBankError;

    fn try_from(order: [u8; 2]) -> Result<Self, Self::Error> {
        Self::new(order[0], order[1])
    }
}

/// Evaluate a derivative of the 2D Gaussian on a centered grid.
///
/// With `G` the Gaussian of [`crate::gaussian_filter`] and `sx`, `sy` its
/// standard deviations:
///
/// - [`DerivativeOrder::FirstX`]: `(-x / sx^2) G`
/// - [`DerivativeOrder::FirstY`]: `(-y / sy^2) G`
/// - [`DerivativeOrder::SecondX`]: `((x^2 - sx^2) / sx^4) G`
/// - [`DerivativeOrder::SecondY`]: `((y^2 - sy^2) / sy^4) G`
/// - [`DerivativeOrder::Laplacian`]: `((x^2 + y^2 - 2 sigma^2) / sigma^4) G`
///
/// # Arguments
///
/// * `grid` - The centered coordinate grid.
/// * `sigma` - The standard deviation along x.
/// * `elongation` - The ratio `sigma_y / sigma_x`.
/// * `order` - The derivative to evaluate.
/// * `mode` - Whether the elongation ratio is applied.
///
/// # Errors
///
/// If `sigma` or (when elongated) `elongation` is not finite and positive.
pub fn derivative_gaussian_filter(
    grid: &MeshGrid,
    sigma: f32,
    elongation: f32,
    order: DerivativeOrder,
    mode: Elongation,
) -> Result<Kernel, FilterBankError> {
    let sigmas = Sigmas::new(sigma, elongation, mode)?;
    let (sx2, sy2) = (sigmas.x * sigmas.x, sigmas.y * sigmas.y);
    let s2 = sigma * sigma;

    let kernel = grid.evaluate(|x, y| {
        let g = gaussian_at(x, y, sigmas);
        let factor = match order {
            DerivativeOrder::FirstX => -x / sx2,
            DerivativeOrder::FirstY => -y / sy2,
            DerivativeOrder::SecondX => (x * x - sx2) / (sx2 * sx2),
            DerivativeOrder::SecondY => (y * y - sy2) / (sy2 * sy2),
            DerivativeOrder::Laplacian => (x * x + y * y - 2.0 * s2) / (s2 * s2),
        };
        factor * g
    });

    Ok(kernel)
}
