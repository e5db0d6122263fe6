//! Skin-pixel detection
//!
//! Decides per pixel whether an RGB triple plausibly belongs to human skin
//! using an HSV gate: red-orange hues, moderate saturation, and neither
//! too dark nor blown out.
//!
//! Algorithm tag: `algo-hsv-skin-gate`

use crate::color::Hsv;
use crate::config::SkinFilterConfig;
use crate::pixel::Pixel;

/// Check a pixel against the default skin gate
///
/// Equivalent to `SkinFilter::new().accepts_rgb(r, g, b)`.
pub fn is_skin_tone(r: u8, g: u8, b: u8) -> bool {
    SkinFilter::new().accepts_rgb(r, g, b)
}

/// HSV-band skin-pixel filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinFilter {
    config: SkinFilterConfig,
}

impl Default for SkinFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinFilter {
    /// Create a filter with the default skin band
    pub fn new() -> Self {
        Self {
            config: SkinFilterConfig::default(),
        }
    }

    /// Create a filter with custom bounds
    pub fn with_config(config: SkinFilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SkinFilterConfig {
        &self.config
    }

    pub fn accepts(&self, pixel: Pixel) -> bool {
        self.accepts_rgb(pixel.r, pixel.g, pixel.b)
    }

    /// Check whether an RGB triple falls inside the skin band
    ///
    /// Pure black is rejected before any HSV math.
    pub fn accepts_rgb(&self, r: u8, g: u8, b: u8) -> bool {
        if r == 0 && g == 0 && b == 0 {
            return false;
        }

        let hsv = Hsv::from_rgb(r, g, b);
        let c = &self.config;

        (hsv.hue >= c.hue_min && hsv.hue <= c.hue_max)
            && (hsv.saturation >= c.saturation_min && hsv.saturation <= c.saturation_max)
            && (hsv.value >= c.value_min && hsv.value <= c.value_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_skin_accepted() {
        assert!(is_skin_tone(200, 120, 90));
        assert!(is_skin_tone(180, 150, 120));
        assert!(is_skin_tone(224, 172, 140));
    }

    #[test]
    fn test_all_grays_rejected() {
        for v in 0..=255u8 {
            assert!(!is_skin_tone(v, v, v), "gray {v} should be rejected");
        }
    }

    #[test]
    fn test_black_rejected() {
        assert!(!is_skin_tone(0, 0, 0));
    }

    #[test]
    fn test_hue_near_360_does_not_wrap_into_band() {
        // hue 340 degrees: plausible saturation and value, wrong side of red
        let hsv = Hsv::from_rgb(180, 150, 160);
        assert!(hsv.hue > 300.0);
        assert!(hsv.saturation >= 0.10 && hsv.value >= 0.20);
        assert!(!is_skin_tone(180, 150, 160));

        // hue ~359: b barely above g
        let near_full_turn = Hsv::from_rgb(200, 120, 121);
        assert!(near_full_turn.hue > 359.0 && near_full_turn.hue < 360.0);
        assert!(!is_skin_tone(200, 120, 121));

        // hue exactly 0: g == b
        let zero = Hsv::from_rgb(200, 120, 120);
        assert_eq!(zero.hue, 0.0);
        assert!(is_skin_tone(200, 120, 120));
    }

    #[test]
    fn test_hue_upper_bound() {
        let inside = Hsv::from_rgb(200, 170, 50);
        assert!((inside.hue - 48.0).abs() < 1e-9);
        let outside = Hsv::from_rgb(200, 180, 50);
        assert!((outside.hue - 52.0).abs() < 1e-9);

        // saturation 0.75 is outside the default band
        let wide = SkinFilter::with_config(SkinFilterConfig {
            saturation_max: 1.0,
            ..SkinFilterConfig::default()
        });
        assert!(wide.accepts_rgb(200, 170, 50));
        assert!(!wide.accepts_rgb(200, 180, 50));
    }

    #[test]
    fn test_saturation_bounds() {
        // s = 0.6 exactly
        assert!(is_skin_tone(200, 100, 80));
        // s = 0.65
        assert!(!is_skin_tone(200, 100, 70));
        // s = 0.1 exactly
        assert!(is_skin_tone(200, 190, 180));
        // s = 0.05
        assert!(!is_skin_tone(200, 195, 190));
    }

    #[test]
    fn test_value_bounds() {
        // v = 51/255 = 0.2 exactly
        assert!(is_skin_tone(51, 40, 30));
        // v below floor
        assert!(!is_skin_tone(50, 40, 30));
        // v = 250/255 > 0.95
        assert!(!is_skin_tone(250, 200, 150));
    }

    #[test]
    fn test_neon_and_non_skin_hues_rejected() {
        assert!(!is_skin_tone(255, 0, 0)); // saturation 1.0
        assert!(!is_skin_tone(90, 200, 120)); // green
        assert!(!is_skin_tone(90, 120, 200)); // blue
    }

    #[test]
    fn test_accepts_pixel_matches_rgb() {
        let filter = SkinFilter::default();
        let px = Pixel::new(200, 120, 90);
        assert_eq!(filter.accepts(px), filter.accepts_rgb(200, 120, 90));
        assert_eq!(filter.config(), &SkinFilterConfig::default());
    }
}
