//! Classification thresholds and scan parameters
//!
//! Compile-time defaults for the skin-pixel gate and the undertone bands.
//! Runtime overrides live in [`crate::config::AnalyzerConfig`].

/// HSV gate for plausible skin pixels
///
/// The band keeps red-orange hues while rejecting very dark, grayscale,
/// and neon pixels.
pub mod skin {
    /// Minimum hue in degrees (inclusive)
    pub const HUE_MIN: f64 = 0.0;
    /// Maximum hue in degrees (inclusive)
    pub const HUE_MAX: f64 = 50.0;

    /// Minimum saturation (inclusive)
    pub const SATURATION_MIN: f64 = 0.10;
    /// Maximum saturation (inclusive)
    pub const SATURATION_MAX: f64 = 0.60;

    /// Minimum value/brightness (inclusive)
    pub const VALUE_MIN: f64 = 0.20;
    /// Maximum value/brightness (inclusive)
    pub const VALUE_MAX: f64 = 0.95;
}

/// Red/green ratio bands, checked warm first, then cool
///
/// Ratios between the bands (1.3, 1.4) and outside both fall back to neutral.
pub mod undertone {
    pub const WARM_RATIO_MIN: f64 = 1.4;
    pub const WARM_RATIO_MAX: f64 = 2.0;

    pub const COOL_RATIO_MIN: f64 = 0.8;
    pub const COOL_RATIO_MAX: f64 = 1.3;
}

/// Pixel scan parameters
pub mod scan {
    /// Buffers smaller than this are always scanned sequentially
    pub const MIN_PARALLEL_PIXELS: usize = 64 * 1024;

    /// Pixels per rayon work item
    pub const PARALLEL_CHUNK_PIXELS: usize = 16 * 1024;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_band_ordering() {
        assert!(skin::HUE_MIN < skin::HUE_MAX);
        assert!(skin::SATURATION_MIN < skin::SATURATION_MAX);
        assert!(skin::VALUE_MIN < skin::VALUE_MAX);
        assert!(skin::VALUE_MAX <= 1.0);
    }

    #[test]
    fn test_undertone_bands_disjoint() {
        assert!(undertone::COOL_RATIO_MAX < undertone::WARM_RATIO_MIN);
        assert!(undertone::COOL_RATIO_MIN < undertone::COOL_RATIO_MAX);
        assert!(undertone::WARM_RATIO_MIN < undertone::WARM_RATIO_MAX);
    }
}
