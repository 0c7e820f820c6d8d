use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FilterError, Result};

/// Main configuration for crt-filter
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Filter pipeline settings
    pub filter: FilterConfig,

    /// Batch processing settings
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.filter.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

/// Filter pipeline configuration
///
/// Out-of-range values are rejected by [`validate`](FilterConfig::validate),
/// never silently clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Opacity of the scanline bands (0-255)
    pub scanline_opacity: u32,

    /// Height in rows of each scanline band; bands repeat every
    /// `2 * line_width` rows
    pub line_width: u32,

    /// Pixelation block size (1 = no pixelation)
    pub pixelation_factor: u32,

    /// Exponent shaping how fast the vignette darkens towards the corners
    pub vignette_curvature: f32,

    /// Radius of the Gaussian blur applied to the vignette mask
    pub blur_radius: u32,

    /// Saturation multiplier (1.0 = unchanged)
    pub saturation: f32,

    /// Per-pixel probability of noise injection (0.0-1.0)
    pub noise_probability: f64,

    /// Maximum absolute per-channel noise delta
    pub noise_amplitude: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            scanline_opacity: 64,
            line_width: 4,
            pixelation_factor: 2,
            vignette_curvature: 0.6,
            blur_radius: 30,
            saturation: 1.5,
            noise_probability: 0.02,
            noise_amplitude: 20,
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scanline_opacity > 255 {
            return Err(FilterError::InvalidParameter {
                name: "scanline_opacity".to_string(),
                value: self.scanline_opacity.to_string(),
            }
            .into());
        }

        if self.line_width == 0 {
            return Err(FilterError::InvalidParameter {
                name: "line_width".to_string(),
                value: self.line_width.to_string(),
            }
            .into());
        }

        if self.pixelation_factor == 0 {
            return Err(FilterError::InvalidParameter {
                name: "pixelation_factor".to_string(),
                value: self.pixelation_factor.to_string(),
            }
            .into());
        }

        if !self.vignette_curvature.is_finite() || self.vignette_curvature <= 0.0 {
            return Err(FilterError::InvalidParameter {
                name: "vignette_curvature".to_string(),
                value: self.vignette_curvature.to_string(),
            }
            .into());
        }

        if !self.saturation.is_finite() || self.saturation < 0.0 {
            return Err(FilterError::InvalidParameter {
                name: "saturation".to_string(),
                value: self.saturation.to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(FilterError::InvalidParameter {
                name: "noise_probability".to_string(),
                value: self.noise_probability.to_string(),
            }
            .into());
        }

        if self.noise_amplitude < 0 {
            return Err(FilterError::InvalidParameter {
                name: "noise_amplitude".to_string(),
                value: self.noise_amplitude.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of parallel worker threads for batch processing
    pub processing_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            processing_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.processing_threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "batch.processing_threads".to_string(),
                value: self.processing_threads.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
