//! Configuration structures for the undertone analysis pipeline.
//!
//! This module defines all tunable parameters for undertone analysis,
//! organized into the skin-pixel gate, the ratio bands, and scan settings.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use undertone_scan::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default();
//! # Ok::<(), undertone_scan::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SkinFilterConfig`]: HSV bounds for skin-pixel detection
//! - [`UndertoneRanges`]: red/green ratio bands for warm and cool
//! - [`ScanConfig`]: parallel scan settings

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{scan, skin, undertone};
use crate::error::{AnalysisError, Result};

/// Complete analyzer configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Skin-pixel gate
    #[serde(default)]
    pub skin_filter: SkinFilterConfig,

    /// Undertone ratio bands
    #[serde(default)]
    pub undertone_ranges: UndertoneRanges,

    /// Pixel scan settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Inclusive HSV bounds a pixel must satisfy to count as skin.
///
/// Hue is in degrees [0, 360); saturation and value are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinFilterConfig {
    pub hue_min: f64,
    pub hue_max: f64,
    pub saturation_min: f64,
    pub saturation_max: f64,
    pub value_min: f64,
    pub value_max: f64,
}

impl Default for SkinFilterConfig {
    fn default() -> Self {
        Self {
            hue_min: skin::HUE_MIN,
            hue_max: skin::HUE_MAX,
            saturation_min: skin::SATURATION_MIN,
            saturation_max: skin::SATURATION_MAX,
            value_min: skin::VALUE_MIN,
            value_max: skin::VALUE_MAX,
        }
    }
}

/// Inclusive red/green ratio bands.
///
/// The warm band is checked before the cool band; anything matching
/// neither is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndertoneRanges {
    pub warm: RatioRange,
    pub cool: RatioRange,
}

/// Closed interval `[min, max]` over the red/green ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    pub min: f64,
    pub max: f64,
}

impl RatioRange {
    /// Check if `ratio` lies within the closed interval
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && ratio <= self.max
    }
}

impl Default for UndertoneRanges {
    fn default() -> Self {
        Self {
            warm: RatioRange {
                min: undertone::WARM_RATIO_MIN,
                max: undertone::WARM_RATIO_MAX,
            },
            cool: RatioRange {
                min: undertone::COOL_RATIO_MIN,
                max: undertone::COOL_RATIO_MAX,
            },
        }
    }
}

/// Pixel scan settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Split large buffers across the rayon thread pool
    pub parallel: bool,

    /// Minimum pixel count before the parallel path is taken
    pub min_parallel_pixels: usize,

    /// Pixels per parallel work item
    pub chunk_pixels: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_pixels: scan::MIN_PARALLEL_PIXELS,
            chunk_pixels: scan::PARALLEL_CHUNK_PIXELS,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from JSON file
    ///
    /// Sections missing from the file take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }

    /// Reject bounds that can never match and a zero chunk size
    pub fn validate(&self) -> Result<()> {
        let f = &self.skin_filter;
        let bounds = [
            ("skin_filter.hue", f.hue_min, f.hue_max),
            ("skin_filter.saturation", f.saturation_min, f.saturation_max),
            ("skin_filter.value", f.value_min, f.value_max),
            (
                "undertone_ranges.warm",
                self.undertone_ranges.warm.min,
                self.undertone_ranges.warm.max,
            ),
            (
                "undertone_ranges.cool",
                self.undertone_ranges.cool.min,
                self.undertone_ranges.cool.max,
            ),
        ];
        for (name, min, max) in bounds {
            if !(min <= max) {
                return Err(AnalysisError::ConfigError {
                    message: format!("{name}: min {min} exceeds max {max}"),
                    source: None,
                });
            }
        }
        if self.scan.chunk_pixels == 0 {
            return Err(AnalysisError::ConfigError {
                message: "scan.chunk_pixels must be positive".to_string(),
                source: None,
            });
        }
        Ok(())
    }
}
