use pblite_kernel::Kernel;

/// A border type used when a filter reads outside of the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingMode {
    /// This border type fills the border with zeros.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// This border type takes the outermost row or column and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the values at the boundary, starting with the value 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    #[default]
    Reflect101,

    /// This border type reflects the values at the boundary, starting with the edge value itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// This border type wraps the content from the opposite side to fill the border.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i - 1;
            } else {
                i = 2 * len - i - 1;
            }
        }
        i as usize
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        ((i % len as isize + len as isize) % len as isize) as usize
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    /// - `Constant`: `None` for any index outside the range
    ///
    /// PRECONDITION: `len > 0`.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            PaddingMode::Constant => None,
            PaddingMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            PaddingMode::Reflect => Some(Self::reflect(i, len)),
            PaddingMode::Reflect101 => Some(Self::reflect101(i, len)),
            PaddingMode::Wrap => Some(Self::wrap(i, len)),
        }
    }

    /// Read the kernel at a possibly out-of-range position, applying the border policy.
    #[inline]
    pub fn sample(&self, src: &Kernel, row: isize, col: isize) -> f32 {
        match (
            self.map_index(row, src.rows()),
            self.map_index(col, src.cols()),
        ) {
            (Some(r), Some(c)) => src.get_unchecked(r, c),
            _ => 0.0,
        }
    }
}
