//! Error types for the undertone_scan library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for undertone_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for undertone analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The skin filter accepted no pixels, so no channel means exist
    #[error("No skin-colored pixels found among {scanned} scanned pixels")]
    EmptySkinSet { scanned: usize },

    /// Pixel buffer is empty, has the wrong arity, or holds out-of-range channels
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File extension is not a decodable image format
    #[error("Unsupported image format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Configuration or recommendation table could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Hex color string could not be parsed
    #[error("Invalid color value: {value}")]
    InvalidColor { value: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Check if retrying with a different photo may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptySkinSet { .. } | AnalysisError::ImageLoadError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::EmptySkinSet { .. } => {
                "No undertone could be determined from this image. Please try a well-lit photo showing more skin.".to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::UnsupportedFormat { path } => {
                format!(
                    "The file '{}' is not a supported image format.",
                    path.display()
                )
            }
            AnalysisError::InvalidInput { .. } => {
                "The image data is empty or malformed.".to_string()
            }
            _ => "Undertone analysis failed. Please try with a different image.".to_string(),
        }
    }
}
