use crate::error::KernelError;
use crate::kernel::{Kernel, KernelSize};

/// A square coordinate grid centered at zero.
///
/// The grid samples `[-size / 2, size / 2]` with unit spacing along both axes,
/// so that `x` grows with the column index and `y` grows with the row index.
/// The size is always odd, which keeps the origin on the center pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshGrid {
    size: usize,
    spread: Vec<f32>,
}

impl MeshGrid {
    /// Create a centered grid with `size x size` samples.
    ///
    /// # Errors
    ///
    /// If `size` is even or zero, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pblite_kernel::MeshGrid;
    ///
    /// let grid = MeshGrid::centered(5).unwrap();
    ///
    /// assert_eq!(grid.spread(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
    /// assert_eq!(grid.x(0, 4), 2.0);
    /// assert_eq!(grid.y(0, 4), -2.0);
    /// ```
    pub fn centered(size: usize) -> Result<Self, KernelError> {
        if size == 0 || size % 2 == 0 {
            return Err(KernelError::InvalidGridSize(size));
        }
        let bound = (size / 2) as f32;
        let step = if size > 1 {
            2.0 * bound / (size - 1) as f32
        } else {
            0.0
        };
        let spread = (0..size).map(|i| -bound + i as f32 * step).collect();
        Ok(Self { size, spread })
    }

    /// Number of samples along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the center sample along each axis.
    pub fn center_index(&self) -> usize {
        self.size / 2
    }

    /// The 1D sampling shared by both axes.
    pub fn spread(&self) -> &[f32] {
        &self.spread
    }

    /// The x coordinate at `(row, col)`.
    #[inline]
    pub fn x(&self, _row: usize, col: usize) -> f32 {
        self.spread[col]
    }

    /// The y coordinate at `(row, col)`.
    #[inline]
    pub fn y(&self, row: usize, _col: usize) -> f32 {
        self.spread[row]
    }

    /// Evaluate a function of the coordinates `(x, y)` on every grid point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pblite_kernel::MeshGrid;
    ///
    /// let grid = MeshGrid::centered(3).unwrap();
    /// let radius = grid.evaluate(|x, y| (x * x + y * y).sqrt());
    ///
    /// assert_eq!(radius.center(), 0.0);
    /// ```
    pub fn evaluate(&self, f: impl Fn(f32, f32) -> f32) -> Kernel {
        Kernel::from_fn(KernelSize::square(self.size), |r, c| {
            f(self.x(r, c), self.y(r, c))
        })
    }

    /// The x coordinates as a kernel-shaped array.
    pub fn xs(&self) -> Kernel {
        self.evaluate(|x, _| x)
    }

    /// The y coordinates as a kernel-shaped array.
    pub fn ys(&self) -> Kernel {
        self.evaluate(|_, y| y)
    }
}
