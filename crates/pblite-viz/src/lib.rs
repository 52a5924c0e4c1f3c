#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the rendering module.
pub mod error;

/// composition of a bank into a single tiled image.
pub mod montage;

/// renderers persisting bank montages.
pub mod renderer;

pub use crate::error::RenderError;
pub use crate::montage::{montage, normalize_to_u8, MontageOptions};
pub use crate::renderer::{BankRenderer, PngMontageRenderer};
