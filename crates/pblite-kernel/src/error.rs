/// An error type for the kernel module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum KernelError {
    /// Error when a centered grid is requested with an even or zero size.
    #[error("Grid size must be odd and non-zero, got {0}")]
    InvalidGridSize(usize),

    /// Error when the data length does not match the kernel size.
    #[error("Data length ({0}) does not match the kernel size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two kernels that must share a shape do not.
    #[error("Kernel shapes do not match: {0} vs {1}")]
    ShapeMismatch(crate::KernelSize, crate::KernelSize),
}
