use crate::error::KernelError;

/// Kernel size in pixels
///
/// # Examples
///
/// ```
/// use pblite_kernel::KernelSize;
///
/// let size = KernelSize::square(7);
///
/// assert_eq!(size.width, 7);
/// assert_eq!(size.height, 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelSize {
    /// Width of the kernel in pixels
    pub width: usize,
    /// Height of the kernel in pixels
    pub height: usize,
}

impl KernelSize {
    /// Create a square kernel size.
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Number of elements of a kernel with this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for KernelSize {
    fn from(size: [usize; 2]) -> Self {
        KernelSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense 2D filter kernel stored in row-major order.
///
/// Kernels are plain `f32` arrays with no normalization guarantee: whatever
/// analytic formula produced them is what they contain.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: KernelSize,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a new kernel from row-major data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the kernel in pixels.
    /// * `data` - The kernel values, row by row.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the kernel size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pblite_kernel::{Kernel, KernelSize};
    ///
    /// let kernel = Kernel::new(KernelSize::square(3), vec![0.0; 9]).unwrap();
    ///
    /// assert_eq!(kernel.rows(), 3);
    /// assert_eq!(kernel.cols(), 3);
    /// ```
    pub fn new(size: KernelSize, data: Vec<f32>) -> Result<Self, KernelError> {
        if data.len() != size.area() {
            return Err(KernelError::InvalidDataLength(data.len(), size.area()));
        }
        Ok(Self { size, data })
    }

    /// Create a new kernel filled with a constant value.
    pub fn from_size_val(size: KernelSize, val: f32) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a new kernel from a function of the pixel coordinates.
    ///
    /// The function receives `(row, col)` and returns the value at that position.
    pub fn from_fn(size: KernelSize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(size.area());
        for r in 0..size.height {
            for c in 0..size.width {
                data.push(f(r, c));
            }
        }
        Self { size, data }
    }

    /// The size of the kernel.
    pub fn size(&self) -> KernelSize {
        self.size
    }

    /// The number of rows of the kernel.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns of the kernel.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The kernel values as a row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The kernel values as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Get the value at `(row, col)` without bounds checking against the shape.
    ///
    /// PRECONDITION: `row < rows()` and `col < cols()`.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols() + col]
    }

    /// The value at the center pixel `(rows / 2, cols / 2)`.
    ///
    /// PRECONDITION: the kernel is not empty, e.g. built on a [`crate::MeshGrid`].
    pub fn center(&self) -> f32 {
        self.get_unchecked(self.rows() / 2, self.cols() / 2)
    }

    /// Sum of all the kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Minimum and maximum values of the kernel.
    ///
    /// Returns `None` for an empty kernel.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.data.first()?;
        Some(
            self.data
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Apply a function to every value and return a new kernel.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Kernel {
        Kernel {
            size: self.size,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two kernels of the same shape element by element.
    ///
    /// # Errors
    ///
    /// If the two kernels do not share the same size, an error is returned.
    pub fn zip_map(
        &self,
        other: &Kernel,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Kernel, KernelError> {
        if self.size != other.size {
            return Err(KernelError::ShapeMismatch(self.size, other.size));
        }
        Ok(Kernel {
            size: self.size,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Largest absolute difference against another kernel of the same shape.
    ///
    /// # Errors
    ///
    /// If the two kernels do not share the same size, an error is returned.
    pub fn max_abs_diff(&self, other: &Kernel) -> Result<f32, KernelError> {
        let diff = self.zip_map(other, |a, b| (a - b).abs())?;
        Ok(diff.data.into_iter().fold(0.0, f32::max))
    }

    /// Iterate over the rows of the kernel.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.cols().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::{Kernel, KernelSize};
    use crate::KernelError;

    #[test]
    fn kernel_new_checks_length() {
        let err = Kernel::new(KernelSize::square(3), vec![0.0; 8]).unwrap_err();
        assert_eq!(err, KernelError::InvalidDataLength(8, 9));
    }

    #[test]
    fn kernel_checked_access() -> Result<(), KernelError> {
        let kernel = Kernel::new(
            KernelSize { width: 3, height: 2 },
            vec![1.0, 0.0, -1.0, 2.0, 0.0, -2.0],
        )?;
        assert_eq!(kernel.size(), KernelSize { width: 3, height: 2 });
        assert_eq!(kernel.get(1, 2), Some(-2.0));
        assert_eq!(kernel.get(2, 0), None);
        Ok(())
    }

    #[test]
    fn kernel_from_fn_is_row_major() {
        let kernel = Kernel::from_fn(KernelSize { width: 3, height: 2 }, |r, c| {
            (r * 10 + c) as f32
        });
        assert_eq!(kernel.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(kernel.iter_rows().count(), 2);
    }

    #[test]
    fn kernel_reductions() {
        let kernel = Kernel::from_fn(KernelSize::square(3), |r, c| r as f32 - c as f32);
        assert_eq!(kernel.sum(), 0.0);
        assert_eq!(kernel.min_max(), Some((-2.0, 2.0)));
        assert_eq!(kernel.center(), 0.0);
    }

    #[test]
    #[should_panic]
    fn kernel_center_of_empty_kernel_panics() {
        let kernel = Kernel::from_size_val(KernelSize::square(0), 0.0);
        assert!(kernel.min_max().is_none());
        kernel.center();
    }

    #[test]
    fn kernel_center_of_single_pixel() {
        let kernel = Kernel::from_size_val(KernelSize::square(1), 3.0);
        assert_eq!(kernel.center(), 3.0);
    }

    #[test]
    fn kernel_zip_map_shape_mismatch() {
        let a = Kernel::from_size_val(KernelSize::square(3), 1.0);
        let b = Kernel::from_size_val(KernelSize::square(5), 1.0);
        assert!(matches!(
            a.zip_map(&b, |x, y| x + y),
            Err(KernelError::ShapeMismatch(_, _))
        ));
    }

    #[test]
    fn kernel_max_abs_diff() -> Result<(), KernelError> {
        let a = Kernel::from_size_val(KernelSize::square(3), 1.0);
        let b = a.map(|v| v * 0.5);
        assert_eq!(a.max_abs_diff(&b)?, 0.5);
        Ok(())
    }
}
