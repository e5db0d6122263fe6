//! Unified image loading with support for multiple formats
//!
//! This module provides a single entry point for turning an image file into
//! the flat [`PixelBuffer`] the analysis core consumes.
//!
//! ## Supported Formats
//!
//! Every format the `image` crate can read with its enabled features
//! (JPEG, PNG, GIF, WebP, TIFF, BMP, ICO, TGA, EXR, PNM, QOI, DDS, HDR, ...).
//!
//! ## Design
//!
//! The format is guessed from the file contents, falling back to the
//! extension, so uploads without a meaningful extension still decode.
//! Images are flattened to 8-bit RGB; alpha is discarded. EXIF orientation
//! is NOT applied since pixel order does not affect the classification.

use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::pixel::PixelBuffer;

/// Load an image from disk and flatten it to a pixel buffer
///
/// # Errors
///
/// Returns:
/// - `AnalysisError::UnsupportedFormat` if neither contents nor extension
///   identify a readable format
/// - `AnalysisError::ImageLoadError` if the file cannot be opened or decoded
/// - `AnalysisError::InvalidInput` if the decoded image has no pixels
///
/// # Example
///
/// ```rust,no_run
/// use undertone_scan::image_loader::load_image;
/// use std::path::Path;
///
/// let pixels = load_image(Path::new("selfie.jpg"))?;
/// println!("Loaded {} pixels", pixels.len());
/// # Ok::<(), undertone_scan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let image = decode_image(path)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    PixelBuffer::from_image(&image)
}

/// Decode an image file using the `image` crate
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| {
            AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
        })?;

    if !reader.format().is_some_and(|format| format.reading_enabled()) {
        return Err(AnalysisError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Check if a file extension names a format this build can decode
pub fn is_supported_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext).is_some_and(|format| format.reading_enabled())
}
