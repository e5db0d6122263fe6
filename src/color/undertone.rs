//! Undertone categories and ratio classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::UndertoneRanges;
use crate::error::AnalysisError;

/// Skin undertone category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub const ALL: [Undertone; 3] = [Undertone::Warm, Undertone::Cool, Undertone::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Undertone {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm" => Ok(Undertone::Warm),
            "cool" => Ok(Undertone::Cool),
            "neutral" => Ok(Undertone::Neutral),
            other => Err(AnalysisError::invalid_input(format!(
                "unknown undertone '{other}'"
            ))),
        }
    }
}

/// Classify a red/green ratio with the default bands
pub fn classify_ratio(ratio: f64) -> Undertone {
    UndertoneRanges::default().classify(ratio)
}

impl UndertoneRanges {
    /// Map a red/green ratio to an undertone
    ///
    /// Warm is checked first, then cool; everything else, including the gap
    /// between the bands and non-finite ratios, is neutral.
    pub fn classify(&self, ratio: f64) -> Undertone {
        if self.warm.contains(ratio) {
            Undertone::Warm
        } else if self.cool.contains(ratio) {
            Undertone::Cool
        } else {
            Undertone::Neutral
        }
    }
}
