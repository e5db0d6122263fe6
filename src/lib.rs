//! # Undertone Scan
//!
//! A Rust crate for classifying skin undertone from digital photographs.
//!
//! This library provides:
//! - Skin-pixel detection with an HSV gate
//! - Mean red/green statistics over the detected skin pixels
//! - Ratio-based classification into warm, cool, or neutral
//! - A built-in palette of colors to wear and avoid for each undertone
//!
//! ## Example
//!
//! ```rust,no_run
//! use undertone_scan::analyze_image;
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("selfie.jpg"))?;
//! println!("Undertone: {}", result.undertone);
//! for color in &result.recommendation.good {
//!     println!("  wear {} ({})", color.name, color.hex);
//! }
//! # Ok::<(), undertone_scan::AnalysisError>(())
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod image_loader;
pub mod pixel;
pub mod recommendation;

pub use color::{classify_ratio, Hsv, SkinStatistics, Undertone, UndertoneClassifier, UndertoneReport};
pub use config::{AnalyzerConfig, RatioRange, ScanConfig, SkinFilterConfig, UndertoneRanges};
pub use detection::{is_skin_tone, SkinFilter};
pub use error::{AnalysisError, Result};
pub use pixel::{Pixel, PixelBuffer};
pub use recommendation::{Recommendation, RecommendationEntry, RecommendationTable, PRO_TIPS};

/// Complete analysis result: undertone, supporting statistics and palette advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Classified undertone
    pub undertone: Undertone,
    /// Statistics over the detected skin pixels
    pub statistics: SkinStatistics,
    /// Mean skin color for display purposes
    pub mean_color: Srgb<u8>,
    /// Mean skin color as "#RRGGBB"
    pub mean_hex: String,
    /// Colors to wear and avoid, with explanation
    pub recommendation: Recommendation,
}

impl AnalysisResult {
    /// Attach the matching recommendation from `table` to a classification
    pub fn from_report(report: UndertoneReport, table: &RecommendationTable) -> Self {
        let recommendation = table.get(report.undertone).clone();
        Self {
            undertone: report.undertone,
            mean_color: report.statistics.mean_color(),
            mean_hex: report.statistics.mean_hex(),
            statistics: report.statistics,
            recommendation,
        }
    }
}

/// Look up the built-in recommendation for an undertone
pub fn recommend(undertone: Undertone) -> &'static Recommendation {
    RecommendationTable::builtin().get(undertone)
}

/// Classify the undertone of an already-decoded pixel buffer
///
/// Uses the default skin gate and ratio bands.
///
/// # Errors
///
/// Returns `AnalysisError::EmptySkinSet` if no pixel looks like skin.
pub fn analyze_pixels(pixels: &PixelBuffer) -> Result<UndertoneReport> {
    UndertoneClassifier::new().classify(pixels)
}

/// Analyze a photograph and recommend a palette
///
/// This is the main entry point for undertone analysis. It decodes the image,
/// classifies the undertone of the skin-colored pixels, and looks up the
/// built-in recommendation table.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - Image cannot be loaded or is an unsupported format
/// - The image contains no pixels
/// - No pixel passes the skin filter
pub fn analyze_image(image_path: &Path) -> Result<AnalysisResult> {
    analyze_image_with_config(image_path, &AnalyzerConfig::default())
}

/// Analyze a photograph with custom thresholds
pub fn analyze_image_with_config(
    image_path: &Path,
    config: &AnalyzerConfig,
) -> Result<AnalysisResult> {
    config.validate()?;
    let pixels = image_loader::load_image(image_path)?;
    let report = UndertoneClassifier::from_config(config).classify(&pixels)?;

    info!(
        path = %image_path.display(),
        undertone = %report.undertone,
        ratio = report.statistics.red_green_ratio,
        coverage = report.statistics.coverage(),
        "undertone analysis complete"
    );

    Ok(AnalysisResult::from_report(
        report,
        RecommendationTable::builtin(),
    ))
}
