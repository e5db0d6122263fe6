//! Color conversion and undertone analysis module
//!
//! This module handles RGB to HSV conversion, hex formatting, the undertone
//! categories, and the statistical reduction from skin pixels to a category.

pub mod analysis;
pub mod conversion;
pub mod undertone;

pub use analysis::{Accumulator, SkinStatistics, UndertoneClassifier, UndertoneReport};
pub use conversion::{hex_to_srgb, srgb_to_hex, Hsv};
pub use undertone::{classify_ratio, Undertone};
