#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # pblite filter banks
//!
//! Multi-scale, multi-orientation kernels used as feature extractors by the
//! pb-lite boundary detector.
//!
//! ## Key Features
//!
//! - **Gaussian evaluators**: isotropic or elongated Gaussians and their
//!   first/second derivatives and Laplacian, sampled on a centered grid
//! - **DoG bank**: Sobel-x responses of Gaussians at 2 scales x 16 orientations
//! - **Leung-Malik bank**: 48 kernels in the small or large scale set
//! - **Gabor bank**: 5 wavelengths x N orientations
//!
//! ## Example
//!
//! ```rust
//! use pblite_filters::{dog_filter_bank, gabor_filter_bank, lm_filter_bank, LmVariant};
//!
//! let dog = dog_filter_bank()?;
//! let lm_small = lm_filter_bank(LmVariant::Small)?;
//! let gabor = gabor_filter_bank(8, 8.0, 0.65, 0.0)?;
//!
//! assert_eq!((dog.len(), lm_small.len(), gabor.len()), (32, 48, 40));
//! # Ok::<(), pblite_filters::FilterBankError>(())
//! ```

mod bank;
mod derivative;
mod dog;
mod error;
mod gabor;
mod gaussian;
mod lm;

pub use bank::{BankLayout, FilterBank};
pub use derivative::{derivative_gaussian_filter, DerivativeOrder};
pub use dog::{dog_filter_bank, dog_filter_bank_with, DogParams, DOG_BANK_NAME};
pub use error::FilterBankError;
pub use gabor::{
    gabor_filter_bank, gabor_filter_bank_with, gabor_kernel, GaborParams, GABOR_BANK_NAME,
};
pub use gaussian::{gaussian_filter, Elongation};
pub use lm::{lm_filter_bank, lm_filter_bank_with, LmParams, LmVariant};
