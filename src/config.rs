use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the value text renders within a card slot, as ratios of the slot's
/// dimensions. Calibrated for the current drop layout; adjust here rather
/// than in the pipeline when the layout changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRegionRatios {
    /// Top edge of the value band, as a fraction of slot height.
    pub vertical_start: f32,
    /// Bottom edge of the value band, as a fraction of slot height.
    pub vertical_end: f32,
    /// Fraction of slot width trimmed from the left.
    pub left_trim: f32,
    /// Fraction of slot width trimmed from the right.
    pub right_trim: f32,
}

impl Default for ValueRegionRatios {
    fn default() -> Self {
        Self {
            vertical_start: 0.82,
            vertical_end: 0.87,
            left_trim: 0.05,
            right_trim: 0.66,
        }
    }
}

impl ValueRegionRatios {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.vertical_start) || self.vertical_end > 1.0 {
            anyhow::bail!("vertical ratios must lie in [0, 1]");
        }
        if self.vertical_start >= self.vertical_end {
            anyhow::bail!(
                "vertical_start ({}) must be below vertical_end ({})",
                self.vertical_start,
                self.vertical_end
            );
        }
        if self.left_trim < 0.0 || self.right_trim < 0.0 {
            anyhow::bail!("trim ratios must be non-negative");
        }
        if self.left_trim >= 1.0 - self.right_trim {
            anyhow::bail!(
                "left_trim ({}) must leave room before the right trim ({})",
                self.left_trim,
                self.right_trim
            );
        }
        Ok(())
    }
}

/// Enhancement parameters tuned for lossy, low-resolution screenshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceParams {
    /// Uniform upscale factor applied before any filtering.
    pub scale_factor: f32,
    /// Sigma for the Gaussian blur that suppresses compression artifacts.
    pub blur_sigma: f32,
    /// Half-width of the adaptive threshold window (window = 2r + 1 pixels).
    pub block_radius: u32,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            scale_factor: 2.0,
            blur_sigma: 1.1,
            block_radius: 5,
        }
    }
}

impl EnhanceParams {
    pub fn validate(&self) -> Result<()> {
        if self.scale_factor < 1.0 {
            anyhow::bail!("scale_factor must be at least 1.0");
        }
        if self.blur_sigma <= 0.0 {
            anyhow::bail!("blur_sigma must be positive");
        }
        Ok(())
    }
}

/// Full pipeline configuration. `Default` carries the calibrated constants;
/// a JSON file may override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub ratios: ValueRegionRatios,
    pub enhance: EnhanceParams,
    /// Directory receiving the per-slot thresholded diagnostic images.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ratios: ValueRegionRatios::default(),
            enhance: EnhanceParams::default(),
            output_dir: PathBuf::from("img"),
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.ratios.validate()?;
        self.enhance.validate()?;
        Ok(())
    }
}
