use image::{GrayImage, Luma};
use pblite_filters::FilterBank;
use pblite_kernel::Kernel;

use crate::error::RenderError;

/// Gray level of a tile whose values are all equal.
const FLAT_TILE_LEVEL: u8 = 128;

/// Largest montage, in pixels, that is allocated.
const MAX_MONTAGE_PIXELS: usize = 1 << 28;

/// Options controlling how a bank is tiled into a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontageOptions {
    /// Integer upscaling factor of each kernel pixel.
    pub tile_scale: usize,
    /// Gap in pixels between tiles and around the montage.
    pub gap: usize,
    /// Gray level of the gaps and of unused cells.
    pub background: u8,
}

impl Default for MontageOptions {
    fn default() -> Self {
        Self {
            tile_scale: 4,
            gap: 2,
            background: 255,
        }
    }
}

/// Min-max normalize a kernel to the full 8-bit range.
///
/// The smallest value maps to 0 and the largest to 255. A kernel whose
/// values are all equal maps to mid-gray.
///
/// # Example
///
/// ```
/// use pblite_kernel::{Kernel, KernelSize};
/// use pblite_viz::normalize_to_u8;
///
/// let kernel = Kernel::new(KernelSize { width: 3, height: 1 }, vec![-1.0, 0.0, 1.0]).unwrap();
///
/// assert_eq!(normalize_to_u8(&kernel), vec![0, 128, 255]);
/// ```
pub fn normalize_to_u8(kernel: &Kernel) -> Vec<u8> {
    let Some((min, max)) = kernel.min_max() else {
        return Vec::new();
    };
    let range = max - min;
    if !(range.is_finite() && range > 0.0) {
        return vec![FLAT_TILE_LEVEL; kernel.as_slice().len()];
    }
    kernel
        .as_slice()
        .iter()
        .map(|&v| ((v - min) / range * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect()
}

/// Compose the kernels of a bank into a single grayscale image.
///
/// Tiles are placed row-major following the bank layout, each one min-max
/// normalized on its own and upscaled with nearest neighbour sampling.
///
/// # Errors
///
/// If the bank is empty, its layout is too small for its kernels, the tile
/// scale is zero, or the resulting image would exceed 2^28 pixels.
pub fn montage(bank: &FilterBank, options: &MontageOptions) -> Result<GrayImage, RenderError> {
    if bank.is_empty() {
        return Err(RenderError::EmptyBank(bank.name().to_string()));
    }
    if options.tile_scale == 0 {
        return Err(RenderError::InvalidTileScale);
    }
    let layout = bank.layout();
    if layout.capacity() < bank.len() {
        return Err(RenderError::LayoutTooSmall {
            name: bank.name().to_string(),
            rows: layout.rows,
            cols: layout.cols,
            len: bank.len(),
        });
    }

    let max_rows = bank.iter().map(|k| k.rows()).max().unwrap_or(0);
    let max_cols = bank.iter().map(|k| k.cols()).max().unwrap_or(0);

    let too_large = || RenderError::MontageTooLarge(usize::MAX, usize::MAX);
    let cell_w = max_cols.checked_mul(options.tile_scale).ok_or_else(too_large)?;
    let cell_h = max_rows.checked_mul(options.tile_scale).ok_or_else(too_large)?;
    let extent = |cells: usize, cell: usize| {
        cell.checked_add(options.gap)
            .and_then(|step| step.checked_mul(cells))
            .and_then(|len| len.checked_add(options.gap))
    };
    let width = extent(layout.cols, cell_w).ok_or_else(too_large)?;
    let height = extent(layout.rows, cell_h).ok_or_else(too_large)?;

    match width.checked_mul(height) {
        Some(area) if area <= MAX_MONTAGE_PIXELS => {}
        _ => return Err(RenderError::MontageTooLarge(width, height)),
    }
    let (Ok(width_u32), Ok(height_u32)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(RenderError::MontageTooLarge(width, height));
    };

    let mut canvas = GrayImage::from_pixel(width_u32, height_u32, Luma([options.background]));

    for (i, kernel) in bank.iter().enumerate() {
        let x0 = options.gap + (i % layout.cols) * (cell_w + options.gap);
        let y0 = options.gap + (i / layout.cols) * (cell_h + options.gap);
        let levels = normalize_to_u8(kernel);

        for (r, row) in levels.chunks_exact(kernel.cols().max(1)).enumerate() {
            for (c, &level) in row.iter().enumerate() {
                for dy in 0..options.tile_scale {
                    for dx in 0..options.tile_scale {
                        let x = x0 + c * options.tile_scale + dx;
                        let y = y0 + r * options.tile_scale + dy;
                        // bounded by width/height, which fit in u32
                        canvas.put_pixel(x as u32, y as u32, Luma([level]));
                    }
                }
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use pblite_filters::{BankLayout, FilterBank};
    use pblite_kernel::{Kernel, KernelSize};

    use super::{montage, normalize_to_u8, MontageOptions};
    use crate::RenderError;

    fn ramp_bank(len: usize, layout: BankLayout) -> FilterBank {
        let kernels = (0..len)
            .map(|i| Kernel::from_fn(KernelSize::square(3), move |r, c| (r * 3 + c + i) as f32))
            .collect();
        FilterBank::new("ramp", layout, kernels)
    }

    #[test]
    fn normalize_flat_kernel_is_mid_gray() {
        let kernel = Kernel::from_size_val(KernelSize::square(2), 0.3);
        assert_eq!(normalize_to_u8(&kernel), vec![128; 4]);
    }

    #[test]
    fn normalize_spans_full_range() {
        let kernel = Kernel::from_fn(KernelSize::square(3), |r, c| (r * 3 + c) as f32);
        let levels = normalize_to_u8(&kernel);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[8], 255);
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn montage_dimensions_and_tiles() -> Result<(), RenderError> {
        let bank = ramp_bank(5, BankLayout { rows: 2, cols: 3 });
        let options = MontageOptions {
            tile_scale: 2,
            gap: 1,
            background: 255,
        };
        let image = montage(&bank, &options)?;
        // 3 cells of 6 pixels plus 4 gaps, 2 cells plus 3 gaps
        assert_eq!(image.width(), 3 * 6 + 4);
        assert_eq!(image.height(), 2 * 6 + 3);

        // top-left pixel of the first tile is the minimum, bottom-right the maximum
        assert_eq!(image.get_pixel(1, 1).0, [0]);
        assert_eq!(image.get_pixel(6, 6).0, [255]);
        // the last cell of the second row is unused
        assert_eq!(image.get_pixel(2 * 7 + 1, 7 + 1).0, [255]);
        // gaps keep the background
        assert_eq!(image.get_pixel(0, 0).0, [255]);
        Ok(())
    }

    #[test]
    fn montage_rejects_huge_tile_scale() {
        let bank = ramp_bank(4, BankLayout { rows: 2, cols: 2 });
        for tile_scale in [usize::MAX / 4, 1 << 20] {
            let options = MontageOptions {
                tile_scale,
                gap: 1,
                background: 255,
            };
            assert!(matches!(
                montage(&bank, &options),
                Err(RenderError::MontageTooLarge(..))
            ));
        }
    }

    #[test]
    fn montage_rejects_small_layout() {
        let bank = ramp_bank(5, BankLayout { rows: 2, cols: 2 });
        assert!(matches!(
            montage(&bank, &MontageOptions::default()),
            Err(RenderError::LayoutTooSmall { len: 5, .. })
        ));
    }

    #[test]
    fn montage_rejects_zero_scale_and_empty_bank() {
        let bank = ramp_bank(1, BankLayout { rows: 1, cols: 1 });
        let options = MontageOptions {
            tile_scale: 0,
            ..Default::default()
        };
        assert!(matches!(
            montage(&bank, &options),
            Err(RenderError::InvalidTileScale)
        ));

        let empty = FilterBank::new("empty", BankLayout { rows: 1, cols: 1 }, vec![]);
        assert!(matches!(
            montage(&empty, &MontageOptions::default()),
            Err(RenderError::EmptyBank(_))
        ));
    }
}
