//! Undertone classification from skin-pixel statistics
//!
//! Reduces a pixel buffer to a single undertone:
//! - Skin-pixel filtering via the HSV gate
//! - Channel sums accumulated in a fold (optionally split across rayon workers)
//! - Mean red / mean green ratio mapped onto fixed bands
//!
//! Algorithm tag: `algo-red-green-ratio`

use palette::Srgb;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{srgb_to_hex, Undertone};
use crate::config::{AnalyzerConfig, ScanConfig, UndertoneRanges};
use crate::detection::SkinFilter;
use crate::pixel::{Pixel, PixelBuffer};
use crate::{AnalysisError, Result};

/// Running channel sums over accepted pixels
///
/// Integer sums make chunked merges exact, so the parallel and sequential
/// scans agree bit for bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub total_red: u64,
    pub total_green: u64,
    pub total_blue: u64,
    pub count: u64,
}

impl Accumulator {
    pub fn add(mut self, pixel: Pixel) -> Self {
        self.total_red += u64::from(pixel.r);
        self.total_green += u64::from(pixel.g);
        self.total_blue += u64::from(pixel.b);
        self.count += 1;
        self
    }

    /// Combine the sums of two disjoint scans
    pub fn merge(self, other: Self) -> Self {
        Self {
            total_red: self.total_red + other.total_red,
            total_green: self.total_green + other.total_green,
            total_blue: self.total_blue + other.total_blue,
            count: self.count + other.count,
        }
    }

    /// Compute channel means and the red/green ratio
    ///
    /// Returns `None` when no pixels were accumulated.
    pub fn statistics(&self, scanned_pixels: usize) -> Option<SkinStatistics> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let mean_red = self.total_red as f64 / n;
        let mean_green = self.total_green as f64 / n;
        let mean_blue = self.total_blue as f64 / n;

        Some(SkinStatistics {
            skin_pixels: self.count as usize,
            scanned_pixels,
            mean_red,
            mean_green,
            mean_blue,
            red_green_ratio: mean_red / mean_green,
        })
    }
}

/// Aggregate color statistics over the accepted skin pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinStatistics {
    /// Pixels accepted by the skin filter
    pub skin_pixels: usize,
    /// Pixels examined
    pub scanned_pixels: usize,
    pub mean_red: f64,
    pub mean_green: f64,
    /// Reported for reference; not used for classification
    pub mean_blue: f64,
    /// `mean_red / mean_green`; infinite when every accepted pixel has no green
    pub red_green_ratio: f64,
}

impl SkinStatistics {
    /// Fraction of scanned pixels accepted as skin (0.0-1.0)
    pub fn coverage(&self) -> f64 {
        if self.scanned_pixels == 0 {
            return 0.0;
        }
        self.skin_pixels as f64 / self.scanned_pixels as f64
    }

    /// Mean skin color, rounded to 8-bit sRGB
    pub fn mean_color(&self) -> Srgb<u8> {
        let to_u8 = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Srgb::new(
            to_u8(self.mean_red),
            to_u8(self.mean_green),
            to_u8(self.mean_blue),
        )
    }

    pub fn mean_hex(&self) -> String {
        srgb_to_hex(self.mean_color())
    }
}

/// Classification result with supporting statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndertoneReport {
    pub undertone: Undertone,
    pub statistics: SkinStatistics,
}

/// Skin filter, ratio bands and scan settings bundled for repeated use
#[derive(Debug, Clone, Default)]
pub struct UndertoneClassifier {
    filter: SkinFilter,
    ranges: UndertoneRanges,
    scan: ScanConfig,
}

impl UndertoneClassifier {
    /// Create a classifier with default bands and parallel scanning
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from a full analyzer configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            filter: SkinFilter::with_config(config.skin_filter),
            ranges: config.undertone_ranges,
            scan: config.scan,
        }
    }

    /// Override the scan settings
    pub fn with_scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    /// Sum the channels of every pixel the skin filter accepts
    pub fn accumulate(&self, buffer: &PixelBuffer) -> Accumulator {
        let pixels = buffer.as_slice();
        let filter = self.filter;

        let use_parallel = self.scan.parallel
            && pixels.len() >= self.scan.min_parallel_pixels
            && self.scan.chunk_pixels > 0;

        if use_parallel {
            pixels
                .par_chunks(self.scan.chunk_pixels)
                .map(|chunk| scan_chunk(&filter, chunk))
                .reduce(Accumulator::default, Accumulator::merge)
        } else {
            scan_chunk(&filter, pixels)
        }
    }

    /// Classify the undertone of a pixel buffer
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptySkinSet` if no pixel passes the skin
    /// filter. No fallback category is substituted.
    pub fn classify(&self, buffer: &PixelBuffer) -> Result<UndertoneReport> {
        let accumulator = self.accumulate(buffer);

        let statistics = accumulator.statistics(buffer.len()).ok_or_else(|| {
            warn!(scanned = buffer.len(), "no skin-colored pixels found");
            AnalysisError::EmptySkinSet {
                scanned: buffer.len(),
            }
        })?;

        let undertone = self.ranges.classify(statistics.red_green_ratio);
        debug!(
            skin_pixels = statistics.skin_pixels,
            scanned = statistics.scanned_pixels,
            mean_red = statistics.mean_red,
            mean_green = statistics.mean_green,
            ratio = statistics.red_green_ratio,
            %undertone,
            "classified skin pixels"
        );

        Ok(UndertoneReport {
            undertone,
            statistics,
        })
    }
}

fn scan_chunk(filter: &SkinFilter, pixels: &[Pixel]) -> Accumulator {
    pixels
        .iter()
        .copied()
        .filter(|px| filter.accepts(*px))
        .fold(Accumulator::default(), Accumulator::add)
}
