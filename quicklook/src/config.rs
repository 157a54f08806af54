//! Preview configuration.
//!
//! Defaults reproduce the classic quick-look behaviour: ten sigma of contrast
//! around the header sky level, a 1000-pixel subsample when autoscaling, and
//! no overlays.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::CropRegion;
use crate::survey::Survey;

pub const DEFAULT_CONTRAST: f32 = 10.0;
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Contrast must be a positive finite number, got {0}")]
    InvalidContrast(f32),

    #[error("Sample size must be at least 1")]
    EmptySample,

    #[error("Symbol height must be a positive finite number, got {0}")]
    InvalidSymbolHeight(f32),

    #[error("Output width must be a positive finite number, got {0}")]
    InvalidWidth(f32),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yml::Error),
}

/// Options for rendering one preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Number of noise sigmas above the background mapped to full brightness.
    pub contrast: f32,
    /// Ignore header `SKYLEVEL`/`SKYNOISE` and estimate them from the pixels.
    pub autoscale: bool,
    /// Pixels drawn for the background estimate.
    pub sample_size: usize,
    /// Seed for the pixel subsample; `None` draws a fresh sample each run.
    pub seed: Option<u64>,
    /// Overlay the source catalogue found next to the image.
    pub catalogue: bool,
    /// Remote survey to overlay, if any.
    pub survey: Option<Survey>,
    /// Marker symbol code for survey sources.
    pub symbol: i32,
    /// Marker and ellipse scale.
    pub symbol_height: f32,
    /// Output page width.
    pub width: f32,
    /// Part of the image to display.
    pub crop: CropRegion,
    /// Show every detector of a multi-extension exposure on one page.
    pub pawprint: bool,
    /// Report cursor positions after drawing.
    pub interactive: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            autoscale: false,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            catalogue: false,
            survey: None,
            symbol: 4,
            symbol_height: 2.0,
            width: 9.0,
            crop: CropRegion::Full,
            pawprint: false,
            interactive: false,
        }
    }
}

impl PreviewConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.contrast.is_finite() && self.contrast > 0.0) {
            return Err(ConfigError::InvalidContrast(self.contrast));
        }
        if self.sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }
        if !(self.symbol_height.is_finite() && self.symbol_height > 0.0) {
            return Err(ConfigError::InvalidSymbolHeight(self.symbol_height));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        Ok(())
    }

    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }
}
