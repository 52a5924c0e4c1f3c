use std::path::{Path, PathBuf};

use pblite_filters::FilterBank;

use crate::error::RenderError;
use crate::montage::{montage, MontageOptions};

/// A sink for filter banks, e.g. a file writer or a viewer.
pub trait BankRenderer {
    /// Render a bank under the given destination name.
    fn render(&mut self, bank: &FilterBank, name: &str) -> Result<(), RenderError>;
}

/// Writes each bank as a PNG montage into an output directory.
///
/// The file of a bank named `name` is `<output_dir>/<name>.png`.
///
/// # Example
///
/// ```no_run
/// use pblite_filters::dog_filter_bank;
/// use pblite_viz::{BankRenderer, MontageOptions, PngMontageRenderer};
///
/// let bank = dog_filter_bank()?;
/// let mut renderer = PngMontageRenderer::new("output", MontageOptions::default());
/// renderer.render(&bank, bank.name())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PngMontageRenderer {
    output_dir: PathBuf,
    options: MontageOptions,
}

impl PngMontageRenderer {
    /// Create a renderer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, options: MontageOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// The directory the montages are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The file a bank with the given name is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.png"))
    }
}

impl BankRenderer for PngMontageRenderer {
    fn render(&mut self, bank: &FilterBank, name: &str) -> Result<(), RenderError> {
        let image = montage(bank, &self.options)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(name);
        image.save(&path)?;

        log::info!(
            "wrote {} kernels of bank {} to {}",
            bank.len(),
            bank.name(),
            path.display()
        );
        Ok(())
    }
}
