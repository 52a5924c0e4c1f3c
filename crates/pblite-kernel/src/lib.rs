#![deny(missing_docs)]
//! Kernel and coordinate grid types for building image filter banks

/// Error types for the kernel module.
pub mod error;

/// centered coordinate grids to evaluate analytic kernels on.
pub mod grid;

/// dense 2D kernel representation.
pub mod kernel;

pub use crate::error::KernelError;
pub use crate::grid::MeshGrid;
pub use crate::kernel::{Kernel, KernelSize};
