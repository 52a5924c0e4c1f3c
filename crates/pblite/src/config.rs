use std::path::Path;

use pblite_filters::{DogParams, GaborParams, LmParams};
use pblite_viz::MontageOptions;
use serde::{Deserialize, Serialize};

/// An error type for the configuration module.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Error to read the configuration file.
    #[error("Failed to read the configuration file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to parse the configuration.
    #[error("Failed to parse the configuration. {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Rendering section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Integer upscaling factor of each kernel pixel.
    pub tile_scale: usize,
    /// Gap in pixels between tiles.
    pub gap: usize,
    /// Gray level of the gaps.
    pub background: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = MontageOptions::default();
        Self {
            tile_scale: options.tile_scale,
            gap: options.gap,
            background: options.background,
        }
    }
}

impl From<&RenderConfig> for MontageOptions {
    fn from(config: &RenderConfig) -> Self {
        MontageOptions {
            tile_scale: config.tile_scale,
            gap: config.gap,
            background: config.background,
        }
    }
}

/// Parameters of every bank and of the renderer.
///
/// Every field is optional in the JSON representation and defaults to the
/// classic pb-lite values.
///
/// # Example
///
/// ```
/// use pblite::config::FilterBankConfig;
///
/// let config = FilterBankConfig::from_json_str(r#"{ "gabor": { "orientations": 4 } }"#).unwrap();
///
/// assert_eq!(config.gabor.orientations, 4);
/// assert_eq!(config.gabor.sigma, 8.0);
/// assert_eq!(config.dog.orientations, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterBankConfig {
    /// Derivative-of-Gaussian bank parameters.
    pub dog: DogParams,
    /// Leung-Malik bank parameters, shared by both variants.
    pub lm: LmParams,
    /// Gabor bank parameters.
    pub gabor: GaborParams,
    /// Montage rendering parameters.
    pub render: RenderConfig,
}

impl FilterBankConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
