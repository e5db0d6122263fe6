//! Color space conversion utilities
//!
//! Provides the conversions the undertone pipeline needs:
//! - RGB (0-255) to HSV, using the six-piece hue formula
//! - sRGB to/from hexadecimal representation

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// Hue/saturation/value triple derived from an RGB pixel
///
/// Hue is in degrees [0, 360); saturation and value are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Convert RGB channels in [0, 255] to HSV
    ///
    /// For gray pixels (`max == min`) hue and saturation are 0. Pure black
    /// yields all zeros.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (rf, gf, bf) = (r as f64, g as f64, b as f64);
        let max = rf.max(gf).max(bf);
        let min = rf.min(gf).min(bf);
        let delta = max - min;

        let value = max / 255.0;
        if max == 0.0 {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value,
            };
        }
        let saturation = delta / max;

        let sector = if delta == 0.0 {
            0.0
        } else if max == rf {
            // `%` keeps the sign of the dividend, so magenta-ish reds stay negative
            ((gf - bf) / delta) % 6.0
        } else if max == gf {
            (bf - rf) / delta + 2.0
        } else {
            (rf - gf) / delta + 4.0
        };

        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Convert an 8-bit sRGB color to a hexadecimal string
///
/// # Returns
///
/// Hex color string (e.g., "#FF7F50")
pub fn srgb_to_hex(srgb: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", srgb.red, srgb.green, srgb.blue)
}

/// Parse hexadecimal color string to 8-bit sRGB
///
/// Accepts "#RRGGBB" or "RRGGBB", case-insensitive.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidColor` if the string is not six hex digits
pub fn hex_to_srgb(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AnalysisError::InvalidColor {
            value: hex.to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| AnalysisError::InvalidColor {
            value: hex.to_string(),
        })
    };

    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Hsv as PaletteHsv};

    #[test]
    fn test_hsv_primary_colors() {
        let red = Hsv::from_rgb(255, 0, 0);
        assert_eq!(red.hue, 0.0);
        assert_eq!(red.saturation, 1.0);
        assert_eq!(red.value, 1.0);

        assert!((Hsv::from_rgb(0, 255, 0).hue - 120.0).abs() < 1e-9);
        assert!((Hsv::from_rgb(0, 0, 255).hue - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsv_gray_has_zero_hue_and_saturation() {
        let gray = Hsv::from_rgb(128, 128, 128);
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!((gray.value - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_hsv_black() {
        let black = Hsv::from_rgb(0, 0, 0);
        assert_eq!(black, Hsv { hue: 0.0, saturation: 0.0, value: 0.0 });
    }

    #[test]
    fn test_hsv_negative_red_sector_wraps() {
        // g < b with red dominant lands just below 360, not near 0
        let hsv = Hsv::from_rgb(180, 150, 160);
        assert!((hsv.hue - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsv_typical_skin() {
        let hsv = Hsv::from_rgb(200, 120, 90);
        assert!((hsv.hue - 16.3636).abs() < 1e-3);
        assert!((hsv.saturation - 0.55).abs() < 1e-12);
        assert!((hsv.value - 200.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_hsv_agrees_with_palette() {
        for &(r, g, b) in &[(200u8, 120u8, 90u8), (30, 200, 90), (10, 20, 250), (250, 10, 40)] {
            let ours = Hsv::from_rgb(r, g, b);
            let srgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
            let theirs: PaletteHsv = PaletteHsv::from_color(srgb);
            let hue_diff = (ours.hue - theirs.hue.into_positive_degrees() as f64).abs();
            assert!(hue_diff < 1e-2 || (360.0 - hue_diff) < 1e-2, "hue mismatch for {r},{g},{b}");
            assert!((ours.saturation - theirs.saturation as f64).abs() < 1e-4);
            assert!((ours.value - theirs.value as f64).abs() < 1e-4);
        }
    }

    #[test]
    fn test_srgb_to_hex() {
        assert_eq!(srgb_to_hex(Srgb::new(255, 127, 80)), "#FF7F50");
        assert_eq!(srgb_to_hex(Srgb::new(0, 0, 128)), "#000080");
    }

    #[test]
    fn test_hex_to_srgb() {
        let coral = hex_to_srgb("#FF7F50").unwrap();
        assert_eq!((coral.red, coral.green, coral.blue), (255, 127, 80));

        let navy = hex_to_srgb("000080").unwrap(); // Test without #
        assert_eq!((navy.red, navy.green, navy.blue), (0, 0, 128));

        let lower = hex_to_srgb("#ff6ec7").unwrap();
        assert_eq!((lower.red, lower.green, lower.blue), (255, 110, 199));
    }

    #[test]
    fn test_hex_to_srgb_invalid() {
        assert!(hex_to_srgb("#FF").is_err()); // Too short
        assert!(hex_to_srgb("#GGGGGG").is_err()); // Invalid chars
        assert!(hex_to_srgb("#+F+F+F").is_err()); // Sign prefixes
        assert!(hex_to_srgb("-1-1-1").is_err());
        assert!(matches!(
            hex_to_srgb("#FFFFFFF"),
            Err(AnalysisError::InvalidColor { .. })
        ));
    }
}
