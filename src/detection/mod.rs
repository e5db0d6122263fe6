//! Skin region detection module
//!
//! This module decides which pixels of a photograph are plausibly skin.

pub mod skin;

pub use skin::{is_skin_tone, SkinFilter};
