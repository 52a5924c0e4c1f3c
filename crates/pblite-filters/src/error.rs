use pblite_kernel::KernelError;

/// An error type for the filter bank module.
///
/// Apart from [`FilterBankError::Kernel`], every variant reports an invalid
/// argument passed by the caller.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterBankError {
    /// The derivative order is not one of (1,0), (0,1), (2,0), (0,2) or (2,2).
    #[error("Unsupported derivative order ({0}, {1})")]
    UnsupportedDerivativeOrder(u8, u8),

    /// The standard deviation must be finite and strictly positive.
    #[error("Sigma must be finite and positive, got {0}")]
    InvalidSigma(f32),

    /// The elongation ratio must be finite and strictly positive.
    #[error("Elongation must be finite and positive, got {0}")]
    InvalidElongation(f32),

    /// A bank needs at least one orientation.
    #[error("Orientation count must be positive, got {0}")]
    InvalidOrientationCount(usize),

    /// A Gabor wavelength must be finite and strictly positive.
    #[error("Wavelength must be finite and positive, got {0}")]
    InvalidWavelength(f32),

    /// The bank type name is not recognized.
    #[error("Unknown bank type: {0:?}")]
    UnknownBankType(String),

    /// Error from the kernel types, e.g. an even window size.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

impl FilterBankError {
    /// Whether the error was caused by an invalid argument.
    ///
    /// Kernel errors raised while building a bank come from the window size
    /// chosen by the caller, so they fall in the same class.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, FilterBankError::Kernel(KernelError::ShapeMismatch(..)))
    }
}

/// Check that a standard deviation is usable.
pub(crate) fn check_sigma(sigma: f32) -> Result<f32, FilterBankError> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(sigma)
    } else {
        Err(FilterBankError::InvalidSigma(sigma))
    }
}
