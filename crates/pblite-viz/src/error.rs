/// An error type for the rendering module.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The bank has no kernel to render.
    #[error("Bank {0:?} is empty")]
    EmptyBank(String),

    /// The layout of the bank cannot hold all of its kernels.
    #[error("Layout {rows}x{cols} of bank {name:?} cannot hold {len} kernels")]
    LayoutTooSmall {
        /// The bank name.
        name: String,
        /// Rows of the layout.
        rows: usize,
        /// Columns of the layout.
        cols: usize,
        /// Number of kernels in the bank.
        len: usize,
    },

    /// The tile scale must be at least one.
    #[error("Tile scale must be positive")]
    InvalidTileScale,

    /// The montage does not fit in the image dimensions.
    #[error("Montage of {0}x{1} pixels is too large")]
    MontageTooLarge(usize, usize),

    /// Error to manipulate the output directory or file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to encode the image.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(#[from] image::ImageError),
}
