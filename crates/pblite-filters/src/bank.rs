use std::ops::Index;

use pblite_imgproc::{interpolation::InterpolationMode, warp::rotate_about_center};
use pblite_kernel::Kernel;

/// How the kernels of a bank are meant to be laid out when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLayout {
    /// Number of rows of tiles.
    pub rows: usize,
    /// Number of columns of tiles.
    pub cols: usize,
}

impl BankLayout {
    /// Number of tiles the layout can hold.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// An ordered sequence of filter kernels.
///
/// The order encodes the (scale, orientation) pairing of each builder and is
/// never changed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    name: String,
    layout: BankLayout,
    kernels: Vec<Kernel>,
}

impl FilterBank {
    /// Create a bank from its kernels.
    ///
    /// # Arguments
    ///
    /// * `name` - A short name, used e.g. as the file stem when rendering.
    /// * `layout` - The display layout hint.
    /// * `kernels` - The kernels, in bank order.
    pub fn new(name: impl Into<String>, layout: BankLayout, kernels: Vec<Kernel>) -> Self {
        Self {
            name: name.into(),
            layout,
            kernels,
        }
    }

    /// The name of the bank.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display layout hint.
    pub fn layout(&self) -> BankLayout {
        self.layout
    }

    /// The kernels in bank order.
    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    /// Number of kernels.
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Whether the bank holds no kernel.
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    /// Get the kernel at `index`.
    pub fn get(&self, index: usize) -> Option<&Kernel> {
        self.kernels.get(index)
    }

    /// Iterate over the kernels in bank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Kernel> {
        self.kernels.iter()
    }

    /// Consume the bank and return its kernels.
    pub fn into_kernels(self) -> Vec<Kernel> {
        self.kernels
    }
}

impl Index<usize> for FilterBank {
    type Output = Kernel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.kernels[index]
    }
}

impl<'a> IntoIterator for &'a FilterBank {
    type Item = &'a Kernel;
    type IntoIter = std::slice::Iter<'a, Kernel>;

    fn into_iter(self) -> Self::IntoIter {
        self.kernels.iter()
    }
}

/// The angle in degrees of orientation `index` out of `count`, evenly spaced over 360.
#[inline]
pub(crate) fn orientation_angle(index: usize, count: usize) -> f32 {
    index as f32 * 360.0 / count as f32
}

/// Rotate a kernel through `count` orientations evenly spaced over 360 degrees.
pub(crate) fn rotations(kernel: &Kernel, count: usize) -> impl Iterator<Item = Kernel> + '_ {
    (0..count).map(move |i| {
        rotate_about_center(
            kernel,
            orientation_angle(i, count),
            InterpolationMode::Bilinear,
        )
    })
}
