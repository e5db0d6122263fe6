//! Color recommendations per undertone
//!
//! A fixed table mapping each [`Undertone`] to colors that flatter it, colors
//! to avoid, and a short explanation. The built-in table is initialised once
//! per process and never mutated; alternative tables with the same JSON shape
//! can be loaded from disk.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::color::{hex_to_srgb, Undertone};
use crate::error::{AnalysisError, Result};

/// A named swatch in a recommendation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// Human-readable color name
    pub name: String,
    /// Color as "#RRGGBB"
    pub hex: String,
}

impl RecommendationEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Parse the swatch color
    pub fn color(&self) -> Result<Srgb<u8>> {
        hex_to_srgb(&self.hex)
    }
}

/// Palette advice for one undertone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Colors that look great
    pub good: Vec<RecommendationEntry>,
    /// Colors to avoid
    pub avoid: Vec<RecommendationEntry>,
    /// Why these colors work for the undertone
    pub explanation: String,
}

/// Recommendations for all three undertones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTable {
    pub warm: Recommendation,
    pub cool: Recommendation,
    pub neutral: Recommendation,
}

/// General advice shown alongside every recommendation
pub const PRO_TIPS: [&str; 4] = [
    "Take photos in natural daylight for the most accurate analysis",
    "These are guidelines, not strict rules - trust what makes you feel confident",
    "Consider the intensity of the colors as well as their undertone",
    "Try different shades within the recommended color families",
];

const WARM_GOOD: &[(&str, &str)] = &[
    ("Coral", "#FF7F50"),
    ("Golden Yellow", "#FFD700"),
    ("Orange-Red", "#FF4500"),
    ("Warm Green", "#98BC5B"),
    ("Ivory", "#FFFFF0"),
    ("Brown", "#A0522D"),
    ("Copper", "#B87333"),
];

const WARM_AVOID: &[(&str, &str)] = &[
    ("Silver", "#C0C0C0"),
    ("Gray", "#808080"),
    ("Pure White", "#FFFFFF"),
    ("Blue-Red", "#9B2D30"),
    ("Electric Blue", "#00FFFF"),
];

const COOL_GOOD: &[(&str, &str)] = &[
    ("Pure White", "#FFFFFF"),
    ("Navy", "#000080"),
    ("Blue-Red", "#9B2D30"),
    ("Purple", "#800080"),
    ("Emerald", "#50C878"),
    ("Pink", "#FF69B4"),
    ("Silver", "#C0C0C0"),
];

const COOL_AVOID: &[(&str, &str)] = &[
    ("Orange", "#FFA500"),
    ("Coral", "#FF7F50"),
    ("Brown", "#A0522D"),
    ("Gold", "#FFD700"),
    ("Warm Green", "#98BC5B"),
];

const NEUTRAL_GOOD: &[(&str, &str)] = &[
    ("Navy", "#000080"),
    ("Red", "#FF0000"),
    ("White", "#FFFFFF"),
    ("Black", "#000000"),
    ("Gray", "#808080"),
    ("Purple", "#800080"),
    ("Green", "#008000"),
];

const NEUTRAL_AVOID: &[(&str, &str)] = &[
    ("Neon Green", "#39FF14"),
    ("Neon Pink", "#FF6EC7"),
    ("Neon Yellow", "#FFFF00"),
];

const WARM_EXPLANATION: &str = "Your skin has warm undertones, which means your skin has golden, peachy, or yellow hints. The recommended colors complement your natural warmth by either harmonizing with it (earth tones) or creating a balanced contrast (specific cool tones). Warm-toned individuals often have golden, brown, or hazel eyes, and their veins appear greenish on their wrists.";

const COOL_EXPLANATION: &str = "Your skin has cool undertones, characterized by pink, red, or blue hints beneath the surface. The suggested colors work with your natural coloring by either enhancing your cool tones (jewel tones) or providing flattering contrast. Cool-toned individuals often have blue, gray, or deep brown eyes, and their veins appear bluish or purple on their wrists.";

const NEUTRAL_EXPLANATION: &str = "Your skin has neutral undertones, meaning you have a balanced mix of warm and cool elements. This versatile undertone allows you to wear a broad spectrum of colors successfully. The key is to focus on the intensity of colors rather than their warmth or coolness. Neutral-toned individuals often can't clearly determine if their veins appear more green or blue.";

fn entries(data: &[(&str, &str)]) -> Vec<RecommendationEntry> {
    data.iter()
        .map(|&(name, hex)| RecommendationEntry::new(name, hex))
        .collect()
}

impl RecommendationTable {
    /// The built-in table, created on first use
    pub fn builtin() -> &'static RecommendationTable {
        static TABLE: OnceLock<RecommendationTable> = OnceLock::new();
        TABLE.get_or_init(|| RecommendationTable {
            warm: Recommendation {
                good: entries(WARM_GOOD),
                avoid: entries(WARM_AVOID),
                explanation: WARM_EXPLANATION.to_string(),
            },
            cool: Recommendation {
                good: entries(COOL_GOOD),
                avoid: entries(COOL_AVOID),
                explanation: COOL_EXPLANATION.to_string(),
            },
            neutral: Recommendation {
                good: entries(NEUTRAL_GOOD),
                avoid: entries(NEUTRAL_AVOID),
                explanation: NEUTRAL_EXPLANATION.to_string(),
            },
        })
    }

    /// Look up the recommendation for an undertone
    pub fn get(&self, undertone: Undertone) -> &Recommendation {
        match undertone {
            Undertone::Warm => &self.warm,
            Undertone::Cool => &self.cool,
            Undertone::Neutral => &self.neutral,
        }
    }

    /// Load a table from JSON file
    ///
    /// Every list must be non-empty and every hex string must parse.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let table: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Save table to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize recommendations", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }

    /// Check every list is populated and every color parses
    pub fn validate(&self) -> Result<()> {
        for undertone in Undertone::ALL {
            let rec = self.get(undertone);
            for (label, list) in [("good", &rec.good), ("avoid", &rec.avoid)] {
                if list.is_empty() {
                    return Err(AnalysisError::ConfigError {
                        message: format!("{undertone}.{label} has no colors"),
                        source: None,
                    });
                }
                for entry in list {
                    entry.color()?;
                }
            }
        }
        Ok(())
    }
}
