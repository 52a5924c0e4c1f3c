use pblite_kernel::{Kernel, KernelSize};

const SOBEL_X_3X3: [[f32; 3]; 3] = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];

/// Create the 3x3 Sobel kernel responding to horizontal changes.
///
/// The kernel is laid out as:
///
/// ```text
/// | 1 0 -1 |
/// | 2 0 -2 |
/// | 1 0 -1 |
/// ```
pub fn sobel_x_kernel_3x3() -> Kernel {
    Kernel::from_fn(KernelSize::square(3), |r, c| SOBEL_X_3X3[r][c])
}

/// Create a kernel with a single one at the center.
///
/// # Arguments
///
/// * `kernel_size` - The size of the square kernel.
pub fn identity_kernel(kernel_size: usize) -> Kernel {
    let center = kernel_size / 2;
    Kernel::from_fn(KernelSize::square(kernel_size), |r, c| {
        if r == center && c == center {
            1.0
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobel_x_kernel_3x3() {
        let kx = sobel_x_kernel_3x3();
        assert_eq!(
            kx.as_slice(),
            &[1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0]
        );
    }

    #[test]
    fn test_identity_kernel() {
        let k = identity_kernel(3);
        assert_eq!(k.sum(), 1.0);
        assert_eq!(k.center(), 1.0);
    }
}
