#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// JSON configuration of the banks and of the renderer.
pub mod config;

/// Building and rendering a selection of banks.
pub mod driver;

#[doc(inline)]
pub use pblite_filters as filters;

#[doc(inline)]
pub use pblite_imgproc as imgproc;

#[doc(inline)]
pub use pblite_kernel as kernel;

#[doc(inline)]
pub use pblite_viz as viz;
